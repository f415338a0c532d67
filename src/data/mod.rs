/// Data layer: spectrum model, loading, line catalog and the wavelength shift.
///
/// Architecture:
/// ```text
///   .dat / .csv                 catalog (static)
///        │                           │
///        ▼                           ▼
///   ┌──────────┐              ┌────────────┐
///   │  loader   │  → Spectrum  │   filter    │  rest lines within range
///   └──────────┘              └────────────┘
///                                    │
///                                    ▼
///                             ┌────────────┐
///                             │  doppler    │  (z, v_exp) → observed λ
///                             └────────────┘
/// ```

pub mod catalog;
pub mod doppler;
pub mod filter;
pub mod loader;
pub mod model;
