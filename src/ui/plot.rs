use eframe::egui::{Color32, Ui};
use egui_plot::{Line, LineStyle, Plot, PlotPoints};

use crate::color::{SPECTRUM_COLOR, TELLURIC_COLOR};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Spectral plot (central panel)
// ---------------------------------------------------------------------------

/// Render the title, the spectrum and every drawn marker.
pub fn spectral_plot(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(state.controller.title());
    });

    let top = state.spectrum.max_flux();
    // Dashed vertical segment from zero flux up to the highest sample.
    let marker_line = |x: f64, color: Color32| {
        Line::new(PlotPoints::from(vec![[x, 0.0], [x, top]]))
            .color(color)
            .style(LineStyle::dashed_loose())
            .width(1.0)
    };

    Plot::new("spectral_plot")
        .x_axis_label("Wavelength (Å)")
        .y_axis_label("Flux")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points: PlotPoints = state.spectrum.points().collect();
            plot_ui.line(
                Line::new(points)
                    .name("Spectrum")
                    .color(SPECTRUM_COLOR)
                    .width(1.5),
            );

            for &w in &state.telluric {
                plot_ui.line(marker_line(w, TELLURIC_COLOR));
            }

            for (color, x) in state.markers.drawn() {
                plot_ui.line(marker_line(x, color));
            }
        });
}
