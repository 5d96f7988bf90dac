use std::fmt;

// ---------------------------------------------------------------------------
// TokenGroup – the usable tokens of one `[`-delimited fragment
// ---------------------------------------------------------------------------

/// Non-empty tokens of a single fragment, before numeric conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGroup {
    /// Index of the fragment in the `[`-split text (fragment 0 is the text
    /// before the first bracket).
    pub fragment: usize,
    /// Tokens with brackets stripped and empties removed. Never empty.
    pub tokens: Vec<String>,
}

impl fmt::Display for TokenGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.tokens)
    }
}

// ---------------------------------------------------------------------------
// Coordinates – the parsed (x, y) samples
// ---------------------------------------------------------------------------

/// Two parallel sequences; `xs[i]` and `ys[i]` form one point.
///
/// Points can only be added in pairs, so both sequences always have the
/// same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinates {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Coordinates {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            xs: Vec::with_capacity(n),
            ys: Vec::with_capacity(n),
        }
    }

    /// Append one point, preserving insertion order.
    pub fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether no points were parsed.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate points as `[x, y]`, the shape the plot layer consumes.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.xs.iter().zip(self.ys.iter()).map(|(&x, &y)| [x, y])
    }

    /// Smallest and largest x, ignoring NaN. `None` when there is nothing to span.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let min = self.xs.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = self.xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        (min <= max).then_some((min, max))
    }
}

impl FromIterator<(f64, f64)> for Coordinates {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut coords = Coordinates::default();
        for (x, y) in iter {
            coords.push(x, y);
        }
        coords
    }
}
