pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Radar chart has no items to lay out")]
    EmptyInput,

    #[error("Item {item} has {actual} values but the chart has {expected} dimensions")]
    ShapeMismatch {
        item: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Dimension count must be at least 3, but the chart has {count} dimensions")]
    DegenerateDimensionCount { count: usize },

    #[error("Item {item} has a non-finite value at dimension {dimension}")]
    NonFiniteValue { item: usize, dimension: usize },

    #[error("Invalid axis range{}: min {min}, max {max}", dimension_suffix(.dimension))]
    InvalidRange {
        dimension: Option<usize>,
        min: f64,
        max: f64,
    },

    #[error("Expected {expected} per-dimension axis ranges, got {actual}")]
    PinnedRangeCount { expected: usize, actual: usize },

    #[error("Invalid plot area height: {height}")]
    InvalidPlotArea { height: f64 },

    #[error("Invalid plot center: ({x}, {y})")]
    InvalidPlotCenter { x: f64, y: f64 },

    #[error("Invalid radar series model: {message}")]
    InvalidModel { message: String },

    #[error("Radar series JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn dimension_suffix(dimension: &Option<usize>) -> String {
    match dimension {
        Some(d) => format!(" for dimension {d}"),
        None => String::new(),
    }
}
