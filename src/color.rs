use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting at `hue_offset` degrees.
pub fn generate_palette(n: usize, hue_offset: f32) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (hue_offset + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Colours for the two things drawn on the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesColors {
    pub points: Color32,
    pub fit_line: Color32,
}

impl Default for SeriesColors {
    fn default() -> Self {
        // 210° puts the points in blue and the line opposite, in orange.
        match generate_palette(2, 210.0)[..] {
            [points, fit_line] => SeriesColors { points, fit_line },
            _ => SeriesColors {
                points: Color32::LIGHT_BLUE,
                fit_line: Color32::ORANGE,
            },
        }
    }
}
