mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use app::CoordFitApp;
use data::{fit, loader};
use eframe::egui;
use state::AppState;

/// Coordinate file read from the working directory.
const INPUT_PATH: &str = "output.txt";

fn main() -> Result<()> {
    env_logger::init();

    let path = Path::new(INPUT_PATH);
    let text = loader::read_text(path)?;

    let groups = loader::token_groups(&text);
    for group in &groups {
        log::debug!("fragment {}: {} tokens", group.fragment, group.tokens.len());
        println!("{group}");
    }

    let coords = loader::to_coordinates(&groups)
        .with_context(|| format!("parsing coordinates from {}", path.display()))?;
    log::info!("Parsed {} points from {}", coords.len(), path.display());

    let line = fit::fit_coordinates(&coords).context("fitting a line")?;
    println!("{line}");

    let state = AppState::new(INPUT_PATH, coords, line);
    match state.r_squared {
        Some(r2) => log::info!("Fit {line} with R² = {r2:.6}"),
        None => log::info!("Fit {line}; R² undefined (constant y)"),
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([500.0, 350.0]),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        "coord-fit – Line Fit",
        options,
        Box::new(move |_cc| Ok(Box::new(CoordFitApp::new(state)))),
    )
    .map_err(|e| anyhow!("plot window failed: {e}"))
}
