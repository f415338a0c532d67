// ---------------------------------------------------------------------------
// WavelengthRange – closed interval covered by a spectrum
// ---------------------------------------------------------------------------

/// Closed wavelength interval `[min, max]` in Ångström.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavelengthRange {
    pub min: f64,
    pub max: f64,
}

impl WavelengthRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `wavelength` lies inside the interval (bounds included).
    pub fn contains(&self, wavelength: f64) -> bool {
        self.min <= wavelength && wavelength <= self.max
    }
}

// ---------------------------------------------------------------------------
// Spectrum – the loaded (wavelength, flux) table
// ---------------------------------------------------------------------------

/// A single observed spectrum. Immutable once loaded.
///
/// Samples are expected in ascending wavelength order but this is not
/// enforced; range queries scan the whole column.
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Wavelength axis (x), Ångström.
    pub wavelength: Vec<f64>,
    /// Flux axis (y) – same length as `wavelength`.
    pub flux: Vec<f64>,
}

impl Spectrum {
    /// Build a spectrum from `(wavelength, flux)` samples.
    pub fn from_samples(samples: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (wavelength, flux) = samples.into_iter().unzip();
        Self { wavelength, flux }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.wavelength.len()
    }

    /// Whether the spectrum has no samples.
    pub fn is_empty(&self) -> bool {
        self.wavelength.is_empty()
    }

    /// Smallest and largest wavelength, `None` for an empty spectrum.
    pub fn wavelength_range(&self) -> Option<WavelengthRange> {
        if self.is_empty() {
            return None;
        }
        let min = self.wavelength.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self
            .wavelength
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        Some(WavelengthRange::new(min, max))
    }

    /// Largest flux value; marker lines are drawn from 0 up to this height.
    pub fn max_flux(&self) -> f64 {
        self.flux.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Iterate the samples as plot points.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.wavelength
            .iter()
            .zip(&self.flux)
            .map(|(&w, &f)| [w, f])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wavelength_range_unsorted() {
        let sp = Spectrum::from_samples([(5000.0, 1.0), (4000.0, 2.0), (9000.0, 0.5)]);
        assert_eq!(sp.len(), 3);
        assert_eq!(
            sp.wavelength_range(),
            Some(WavelengthRange::new(4000.0, 9000.0))
        );
        assert_eq!(sp.max_flux(), 2.0);
    }

    #[test]
    fn test_empty_spectrum_has_no_range() {
        let sp = Spectrum::from_samples(Vec::<(f64, f64)>::new());
        assert!(sp.is_empty());
        assert!(sp.wavelength_range().is_none());
    }

    #[test]
    fn test_range_contains_bounds() {
        let r = WavelengthRange::new(4000.0, 9000.0);
        assert!(r.contains(4000.0));
        assert!(r.contains(9000.0));
        assert!(!r.contains(3999.9));
        assert!(!r.contains(9722.0));
    }
}
