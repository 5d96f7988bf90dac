use std::fmt;

use thiserror::Error;

use super::model::Coordinates;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons a straight line cannot be fitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitError {
    #[error("x has {xs} values but y has {ys}")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("a line needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("all {0} x values are identical; the slope is undefined")]
    DegenerateX(usize),

    #[error("fit produced a non-finite coefficient")]
    NonFinite,
}

// ---------------------------------------------------------------------------
// LineFit – y = slope·x + intercept
// ---------------------------------------------------------------------------

/// Result of a degree-1 least-squares fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    /// `m`
    pub slope: f64,
    /// `b`
    pub intercept: f64,
}

impl LineFit {
    /// Evaluate the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Coefficient of determination against the data the line was fitted to.
    ///
    /// `None` when the y values have zero variance.
    pub fn r_squared(&self, coords: &Coordinates) -> Option<f64> {
        if coords.is_empty() {
            return None;
        }
        let mean_y = coords.ys().iter().sum::<f64>() / coords.len() as f64;

        let (ss_res, ss_tot) = coords.points().fold((0.0, 0.0), |(res, tot), [x, y]| {
            let r = y - self.predict(x);
            let d = y - mean_y;
            (res + r * r, tot + d * d)
        });

        (ss_tot > 0.0).then(|| 1.0 - ss_res / ss_tot)
    }
}

/// Prints `m=<slope>,b=<intercept>`, always with a decimal point (`1.0`).
impl fmt::Display for LineFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m={:?},b={:?}", self.slope, self.intercept)
    }
}

// ---------------------------------------------------------------------------
// Fitting
// ---------------------------------------------------------------------------

/// Ordinary least-squares line through `(xs[i], ys[i])`.
///
/// Closed form in centered coordinates:
///
/// ```text
/// Sxx = Σ (x - x̄)²
/// Sxy = Σ (x - x̄)(y - ȳ)
/// m   = Sxy / Sxx
/// b   = ȳ - m·x̄
/// ```
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Result<LineFit, FitError> {
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    let n = xs.len();
    if n < 2 {
        return Err(FitError::TooFewPoints(n));
    }

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let (sxx, sxy) = xs
        .iter()
        .zip(ys)
        .fold((0.0, 0.0), |(sxx, sxy), (&x, &y)| {
            let dx = x - mean_x;
            (sxx + dx * dx, sxy + dx * (y - mean_y))
        });

    if sxx == 0.0 {
        return Err(FitError::DegenerateX(n));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    if !slope.is_finite() || !intercept.is_finite() {
        return Err(FitError::NonFinite);
    }

    Ok(LineFit { slope, intercept })
}

/// Fit a line to parsed coordinates.
pub fn fit_coordinates(coords: &Coordinates) -> Result<LineFit, FitError> {
    fit_line(coords.xs(), coords.ys())
}
