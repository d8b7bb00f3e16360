use thiserror::Error;

/// Failures of fitting a [Spline](crate::Spline) or evaluating it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("insufficient samples: got {got}, need at least {required}")]
    InsufficientSamples { got: usize, required: usize },

    #[error("x values must be strictly increasing: x[{index}] = {current} follows {previous}")]
    NonMonotonicInput { index: usize, previous: f64, current: f64 },

    #[error("non-finite coordinate in sample {index}: ({x}, {y})")]
    DegenerateInput { index: usize, x: f64, y: f64 },

    #[error("query point {x} is not finite")]
    NonFiniteQuery { x: f64 },

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("singular system while solving for knot slopes at row {row}")]
    SingularSystem { row: usize },
}

/// Failures of loading or interpolating a cluster cost table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("cannot read cost table: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse cost table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed sample data: {0}")]
    MalformedSamples(String),

    #[error("cluster '{cluster}': {source}")]
    Cluster {
        cluster: String,
        #[source]
        source: SplineError,
    },
}
