use std::path::{Path, PathBuf};

use crate::controller::{ControlEvent, Controller};
use crate::data::catalog::{ION_CATALOG, TELLURIC_LINES};
use crate::data::doppler::DomainError;
use crate::data::filter::lines_in_range;
use crate::data::loader::{load_spectrum, LoadError};
use crate::data::model::{Spectrum, WavelengthRange};
use crate::ui::markers::MarkerSet;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// File the current spectrum came from.
    pub source: PathBuf,

    /// Loaded spectrum; read-only until replaced by File → Open….
    pub spectrum: Spectrum,

    /// Wavelength bounds of `spectrum`.
    pub range: WavelengthRange,

    /// Ion-line markers drawn over the spectrum.
    pub markers: MarkerSet,

    /// Telluric wavelengths inside the spectrum; fixed and always shown.
    pub telluric: Vec<f64>,

    /// Slider / checkbox state machine.
    pub controller: Controller,

    /// Events queued by widgets during the current frame.
    pub pending: Vec<ControlEvent>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the session around a loaded, non-empty spectrum.
    pub fn new(source: PathBuf, spectrum: Spectrum) -> Result<Self, LoadError> {
        let range = spectrum_range(&source, &spectrum)?;
        let markers = MarkerSet::build(ION_CATALOG, range);
        let controller = Controller::new(ION_CATALOG, &markers, range);

        Ok(Self {
            telluric: telluric_in_range(range),
            source,
            spectrum,
            range,
            markers,
            controller,
            pending: Vec::new(),
            status_message: None,
        })
    }

    /// Position the sliders before the first frame, as if the user had
    /// dragged them to `redshift` and `v_exp`.
    pub fn seed_shift(&mut self, redshift: f64, v_exp: f64) -> Result<(), DomainError> {
        if redshift != 0.0 {
            self.controller
                .handle(ControlEvent::SetRedshift(redshift), &mut self.markers)?;
        }
        if v_exp != 0.0 {
            self.controller
                .handle(ControlEvent::SetExpansionVelocity(v_exp), &mut self.markers)?;
        }
        Ok(())
    }

    /// Queue an event for the end of the frame.
    pub fn push(&mut self, event: ControlEvent) {
        self.pending.push(event);
    }

    /// Handle every queued event in arrival order.
    pub fn dispatch_pending(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        let events = std::mem::take(&mut self.pending);
        self.controller.dispatch(events, &mut self.markers);
        true
    }

    /// Replace the spectrum, keeping redshift, velocity and visibility.
    pub fn set_spectrum(&mut self, source: PathBuf, spectrum: Spectrum) -> Result<(), LoadError> {
        let range = spectrum_range(&source, &spectrum)?;
        let mut markers = MarkerSet::build(ION_CATALOG, range);
        self.controller.bind(&markers, range);
        if let Err(e) = self.controller.reapply(&mut markers) {
            log::warn!("Could not re-apply shift to new spectrum: {e}");
        }

        self.telluric = telluric_in_range(range);
        self.source = source;
        self.spectrum = spectrum;
        self.range = range;
        self.markers = markers;
        self.status_message = None;
        Ok(())
    }

    /// Load a file and swap it in. Failures keep the current spectrum and
    /// surface in the status line.
    pub fn open(&mut self, path: &Path) {
        let result = load_spectrum(path)
            .and_then(|spectrum| self.set_spectrum(path.to_path_buf(), spectrum));
        match result {
            Ok(()) => log_loaded(path, &self.spectrum, self.range),
            Err(e) => {
                log::error!("Error loading file: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

/// Diagnostic line emitted after every successful load.
pub fn log_loaded(path: &Path, spectrum: &Spectrum, range: WavelengthRange) {
    log::info!(
        "Spectrum data loaded from {} ({} samples, {:.1}–{:.1} Å)",
        path.display(),
        spectrum.len(),
        range.min,
        range.max
    );
}

fn spectrum_range(source: &Path, spectrum: &Spectrum) -> Result<WavelengthRange, LoadError> {
    spectrum.wavelength_range().ok_or_else(|| LoadError::Empty {
        path: source.to_path_buf(),
    })
}

fn telluric_in_range(range: WavelengthRange) -> Vec<f64> {
    lines_in_range(TELLURIC_LINES, range)
}
