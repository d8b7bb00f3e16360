//! Not-a-knot cubic spline interpolation for filling energy model cost tables from sparse
//! hardware measurements.
//!
//! The curve passes through every sample, is C2 continuous and extends the boundary
//! segments' cubics outside the sampled range.
//!
//! # Example
//! ```
//! use cost_spline::{Sample, Spline};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let samples = vec![
//!     Sample::new(614400.0, 8.0),
//!     Sample::new(883200.0, 14.0),
//!     Sample::new(1036800.0, 18.0),
//!     Sample::new(1363200.0, 28.0),
//!     Sample::new(1536000.0, 35.0),
//!     Sample::new(1670400.0, 43.0),
//!     Sample::new(1804800.0, 54.0),
//! ];
//! let spline = Spline::new(samples).unwrap();
//!
//! assert_approx_eq!(14.478, spline.evaluate(902400.0).unwrap(), 1e-3);
//! assert_eq!(35.0, spline.evaluate(1536000.0).unwrap());
//! ```

mod error;
mod polynomial;
mod sample;
mod spline;
pub mod table;

pub use error::{SplineError, TableError};
pub use sample::Sample;
pub use spline::{Spline, MIN_SAMPLES};
