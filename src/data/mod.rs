/// Data layer: core types, loading, and fitting.
///
/// Architecture:
/// ```text
///  output.txt  ( [x,y] [x,y] ... )
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  normalize text → token groups → Coordinates
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ Coordinates  │  xs, ys (equal length, file order)
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   fit     │  least squares → LineFit { slope, intercept }
///   └──────────┘
/// ```

pub mod fit;
pub mod loader;
pub mod model;
