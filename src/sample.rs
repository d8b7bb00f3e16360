use serde::{Deserialize, Serialize};

/// Sample represents one measured point through which the fitted curve passes.
/// - `x` - coordinate (operating frequency in the cost tables),
/// - `y` - coordinate (measured cost at that frequency).
///
/// In serialized form a sample is a two element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Sample {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Sample {
    /// Creates [Sample] from its coordinates. Coordinates are not validated here,
    /// non-finite values are rejected when the samples are fitted.
    /// # Example
    /// ```
    /// use cost_spline::Sample;
    ///
    /// let sample = Sample::new(614400.0, 8.0);
    /// assert_eq!(sample, Sample::from((614400.0, 8.0)));
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Sample { x, y }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Sample { x, y }
    }
}

impl From<Sample> for (f64, f64) {
    fn from(sample: Sample) -> Self {
        (sample.x, sample.y)
    }
}
