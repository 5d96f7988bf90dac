use crate::color::SeriesColors;
use crate::data::fit::LineFit;
use crate::data::model::Coordinates;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// File the coordinates were read from, shown in the top bar.
    pub source: String,

    /// Parsed samples.
    pub coords: Coordinates,

    /// Least-squares line through `coords`.
    pub fit: LineFit,

    /// Cached R² of `fit` (None when y has no variance).
    pub r_squared: Option<f64>,

    /// Plot colours.
    pub colors: SeriesColors,

    /// Whether the sample markers are drawn.
    pub show_points: bool,

    /// Whether the fitted line is drawn.
    pub show_fit_line: bool,
}

impl AppState {
    pub fn new(source: impl Into<String>, coords: Coordinates, fit: LineFit) -> Self {
        let r_squared = fit.r_squared(&coords);
        Self {
            source: source.into(),
            coords,
            fit,
            r_squared,
            colors: SeriesColors::default(),
            show_points: true,
            show_fit_line: true,
        }
    }

    /// End points of the fitted line across the x-range of the data.
    pub fn fit_segment(&self) -> Option<[[f64; 2]; 2]> {
        let (lo, hi) = self.coords.x_range()?;
        Some([[lo, self.fit.predict(lo)], [hi, self.fit.predict(hi)]])
    }

    /// One-line summary used in the top bar.
    pub fn summary(&self) -> String {
        format!("{} points, {}", self.coords.len(), self.fit)
    }

    pub fn toggle_points(&mut self) {
        self.show_points = !self.show_points;
    }

    pub fn toggle_fit_line(&mut self) {
        self.show_fit_line = !self.show_fit_line;
    }
}
