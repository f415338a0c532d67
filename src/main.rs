mod app;
mod color;
mod controller;
mod data;
mod state;
mod ui;

use std::ops::RangeInclusive;
use std::path::PathBuf;

use anyhow::{Context, Result};
use app::SnLinesApp;
use clap::Parser;
use controller::{REDSHIFT_RANGE, V_EXP_RANGE};
use eframe::egui;
use state::AppState;

/// Interactive supernova spectrum viewer with shifted ion-line overlays.
#[derive(Parser, Debug)]
#[command(name = "sn-lines")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Spectrum file (.dat whitespace-delimited or .csv comma-delimited)
    path: PathBuf,

    /// Initial redshift z
    #[arg(long, default_value_t = 0.0, value_parser = parse_redshift)]
    redshift: f64,

    /// Initial expansion velocity in km/s
    #[arg(long = "v-exp", default_value_t = 0.0, value_parser = parse_v_exp)]
    v_exp: f64,
}

fn parse_bounded(s: &str, range: RangeInclusive<f64>) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "{value} is outside [{}, {}]",
            range.start(),
            range.end()
        ))
    }
}

fn parse_redshift(s: &str) -> std::result::Result<f64, String> {
    parse_bounded(s, REDSHIFT_RANGE)
}

fn parse_v_exp(s: &str) -> std::result::Result<f64, String> {
    parse_bounded(s, V_EXP_RANGE)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let spectrum = data::loader::load_spectrum(&cli.path).context("no spectrum to display")?;

    let mut state = AppState::new(cli.path.clone(), spectrum)?;
    state::log_loaded(&cli.path, &state.spectrum, state.range);
    state.seed_shift(cli.redshift, cli.v_exp)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SN Lines – Supernova Spectrum Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(SnLinesApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
