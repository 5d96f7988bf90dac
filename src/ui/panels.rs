use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – fit summary and parsed points
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Fit");
    ui.separator();

    egui::Grid::new("fit_summary")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.label("slope (m)");
            ui.monospace(format!("{:?}", state.fit.slope));
            ui.end_row();

            ui.label("intercept (b)");
            ui.monospace(format!("{:?}", state.fit.intercept));
            ui.end_row();

            ui.label("R²");
            ui.monospace(
                state
                    .r_squared
                    .map(|r| format!("{r:.6}"))
                    .unwrap_or_else(|| "n/a".to_string()),
            );
            ui.end_row();

            ui.label("points");
            ui.monospace(state.coords.len().to_string());
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.heading("Points");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("point_table")
                .num_columns(3)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    ui.strong("#");
                    ui.strong("x");
                    ui.strong("y");
                    ui.end_row();

                    for (i, [x, y]) in state.coords.points().enumerate() {
                        ui.label(i.to_string());
                        ui.monospace(format!("{x}"));
                        ui.monospace(format!("{y}"));
                        ui.end_row();
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new(&state.source).strong());

        ui.separator();

        ui.label(state.summary());

        ui.separator();

        if ui.selectable_label(state.show_points, "Points").clicked() {
            state.toggle_points();
        }
        if ui.selectable_label(state.show_fit_line, "Fit line").clicked() {
            state.toggle_fit_line();
        }
    });
}
