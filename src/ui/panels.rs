use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::controller::{ControlEvent, REDSHIFT_RANGE, V_EXP_RANGE};
use crate::data::catalog;
use crate::data::loader::SUPPORTED_EXTENSIONS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – ion group checkboxes
// ---------------------------------------------------------------------------

/// Render the left panel: one checkbox per ion group, tinted with its colour.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Ion lines");
    ui.separator();

    let mut toggled = Vec::new();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for group in state.markers.groups() {
                let mut checked = state.controller.state().is_visible(group.label);
                let text = RichText::new(group.label).color(group.color);
                let total = catalog::lookup(group.label).map_or(0, |ion| ion.rest.len());
                let response = ui
                    .checkbox(&mut checked, text)
                    .on_hover_text(format!("{} of {total} lines in range", group.ids.len()));
                if response.changed() {
                    toggled.push(ControlEvent::ToggleGroup(group.label.to_string()));
                }
            }
        });

    for event in toggled {
        state.push(event);
    }
}

// ---------------------------------------------------------------------------
// Bottom panel – shift sliders
// ---------------------------------------------------------------------------

/// Render the redshift and expansion velocity sliders.
pub fn slider_panel(ui: &mut Ui, state: &mut AppState) {
    let current = state.controller.state();
    let mut redshift = current.redshift;
    let mut v_exp = current.expansion_velocity;

    ui.spacing_mut().slider_width = (ui.available_width() * 0.6).max(200.0);

    let z_changed = ui
        .add(
            egui::Slider::new(&mut redshift, REDSHIFT_RANGE)
                .text("Redshift")
                .fixed_decimals(2),
        )
        .changed();
    let v_changed = ui
        .add(
            egui::Slider::new(&mut v_exp, V_EXP_RANGE)
                .text("v_exp (km/s)")
                .fixed_decimals(0),
        )
        .changed();

    if z_changed {
        state.push(ControlEvent::SetRedshift(redshift));
    }
    if v_changed {
        state.push(ControlEvent::SetExpansionVelocity(v_exp));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let name = state
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ui.label(format!(
            "{name}: {} samples, {:.0}–{:.0} Å",
            state.spectrum.len(),
            state.range.min,
            state.range.max,
        ));
        if state.markers.is_empty() {
            ui.label("no catalog lines in range");
        } else {
            ui.label(format!("{} ion lines in range", state.markers.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open spectrum")
        .add_filter("Supported files", SUPPORTED_EXTENSIONS)
        .add_filter("Whitespace table", &["dat"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
