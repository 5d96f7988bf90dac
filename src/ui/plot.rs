use eframe::egui::Ui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter + fitted line (central panel)
// ---------------------------------------------------------------------------

/// Render the data points and the least-squares line.
pub fn fit_plot(ui: &mut Ui, state: &AppState) {
    if state.coords.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No coordinates to plot");
        });
        return;
    }

    Plot::new("fit_plot")
        .legend(Legend::default())
        .x_axis_label("x")
        .y_axis_label("y")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if state.show_points {
                let points: PlotPoints = state.coords.points().collect();
                plot_ui.points(
                    Points::new(points)
                        .name("data")
                        .color(state.colors.points)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(3.0),
                );
            }

            if state.show_fit_line {
                if let Some(segment) = state.fit_segment() {
                    plot_ui.line(
                        Line::new(PlotPoints::from(segment.to_vec()))
                            .name(state.fit.to_string())
                            .color(state.colors.fit_line)
                            .width(1.5),
                    );
                }
            }
        });
}
