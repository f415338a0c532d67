use super::model::WavelengthRange;

/// Rest wavelengths that fall inside `range`, in catalog order.
///
/// Only these produce a marker; lines outside the spectrum at load time are
/// never drawn, whatever the later redshift.
pub fn lines_in_range(rest: &[f64], range: WavelengthRange) -> Vec<f64> {
    rest.iter().copied().filter(|&w| range.contains(w)).collect()
}

/// Position of a shifted marker, or `None` when it has left the spectrum.
pub fn shifted_position(observed: f64, range: WavelengthRange) -> Option<f64> {
    range.contains(observed).then_some(observed)
}
