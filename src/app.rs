use eframe::egui;

use crate::controller::Phase;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SnLinesApp {
    pub state: AppState,
}

impl SnLinesApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SnLinesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: redshift / velocity sliders ----
        egui::TopBottomPanel::bottom("slider_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            panels::slider_panel(ui, &mut self.state);
            ui.add_space(4.0);
        });

        // ---- Left side panel: ion groups ----
        egui::SidePanel::left("ion_panel")
            .default_width(160.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // Widget events from this frame, applied before the plot is drawn.
        if self.state.dispatch_pending() {
            debug_assert_eq!(self.state.controller.phase(), Phase::Idle);
            ctx.request_repaint();
        }

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::spectral_plot(ui, &self.state);
        });
    }
}
