use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Colour of the fixed telluric markers.
pub const TELLURIC_COLOR: Color32 = Color32::GRAY;

/// Colour of the spectrum curve.
pub const SPECTRUM_COLOR: Color32 = Color32::LIGHT_BLUE;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
///
/// Lightness alternates between neighbours, so adjacent ion groups in the
/// checkbox list stay distinguishable even with many groups.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let lightness = if i % 2 == 0 { 0.55 } else { 0.7 };
            let hsl = Hsl::new(hue, 0.75, lightness);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_palette_size_and_distinct() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(27);
        assert_eq!(colors.len(), 27);
        let unique: BTreeSet<[u8; 4]> = colors.iter().map(|c| c.to_array()).collect();
        assert_eq!(unique.len(), 27);
    }
}
