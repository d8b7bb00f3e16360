use nalgebra::{DVector, Vector4};
use tracing::{debug, trace};

use crate::{error::SplineError, polynomial::Polynomial, sample::Sample};

/// Smallest number of samples a not-a-knot cubic can be fitted through.
pub const MIN_SAMPLES: usize = 4;

/// Interpolating cubic spline with not-a-knot end conditions.
///
/// Passes through every sample, is C2 continuous at every interior knot and C3 continuous
/// at the second and second to last knot. Immutable once fitted.
#[derive(Debug, Clone)]
pub struct Spline {
    knots: Vec<Sample>,
    polynomials: Vec<Polynomial>,
    min_x: f64,
    max_x: f64,
    is_knot_spacing_uniform: bool,
}

impl Spline {
    /// Fits the spline through `samples`, which must have strictly increasing, finite x values.
    ///
    /// # Errors
    /// - [SplineError::DegenerateInput] for a non-finite coordinate,
    /// - [SplineError::NonMonotonicInput] for duplicate or decreasing x,
    /// - [SplineError::InsufficientSamples] for fewer than [MIN_SAMPLES] samples.
    pub fn new(samples: Vec<Sample>) -> Result<Self, SplineError> {
        check_samples(&samples)?;

        let number_of_intervals = samples.len() - 1;
        let min_x = samples[0].x;
        let max_x = samples[number_of_intervals].x;

        let mut spline = Spline {
            knots: samples,
            polynomials: Vec::with_capacity(number_of_intervals),
            min_x,
            max_x,
            is_knot_spacing_uniform: false,
        };

        spline.check_knots_spacing();
        spline.calculate_polynomials()?;

        debug!(
            knots = spline.knots.len(),
            min_x = spline.min_x,
            max_x = spline.max_x,
            uniform = spline.is_knot_spacing_uniform,
            "fitted not-a-knot cubic spline"
        );
        Ok(spline)
    }

    /// Fits the spline through paired coordinate slices.
    pub fn from_xy(x: &[f64], y: &[f64]) -> Result<Self, SplineError> {
        if x.len() != y.len() {
            return Err(SplineError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        let samples = x.iter().zip(y).map(|(x, y)| Sample::new(*x, *y)).collect();
        Self::new(samples)
    }

    /// Value of the curve at `x`. Outside the knot range the boundary segment's cubic is
    /// evaluated as is.
    pub fn evaluate(&self, x: f64) -> Result<f64, SplineError> {
        check_query(x)?;
        if !self.is_in_range(x) {
            debug!(x, min_x = self.min_x, max_x = self.max_x, "extrapolating");
        }
        Ok(self.evaluate_unchecked(self.find_segment_index(x), x))
    }

    /// Evaluates every element of `x_vector`, keeping order. Fails as a whole if any query
    /// is not finite.
    pub fn batch_evaluate(&self, x_vector: &[f64]) -> Result<Vec<f64>, SplineError> {
        for x in x_vector {
            check_query(*x)?;
        }

        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            index = self.find_segment_index_with_hint(index, *x);
            results.push(self.evaluate_unchecked(index, *x));
        }
        Ok(results)
    }

    /// Derivative of given `order` at `x`. Order 0 is the value itself, orders above 3 are 0.
    pub fn derivative(&self, x: f64, order: usize) -> Result<f64, SplineError> {
        if order == 0 {
            return self.evaluate(x);
        }
        check_query(x)?;
        Ok(self.polynomials[self.find_segment_index(x)].derivative(x, order))
    }

    pub fn knots(&self) -> &[Sample] {
        &self.knots
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn number_of_segments(&self) -> usize {
        self.polynomials.len()
    }

    /// Coefficients `[c0, c1, c2, c3]` of segment `index` in powers of `x - knots[index].x`.
    pub fn segment_coefficients(&self, index: usize) -> Option<[f64; 4]> {
        self.polynomials.get(index).map(|p| {
            let c = p.coefficients();
            [c[0], c[1], c[2], c[3]]
        })
    }

    pub fn is_in_range(&self, x: f64) -> bool {
        self.min_x <= x && x <= self.max_x
    }

    fn evaluate_unchecked(&self, index: usize, x: f64) -> f64 {
        // the last knot has no segment starting at it
        if x == self.max_x {
            return self.knots[self.knots.len() - 1].y;
        }
        self.polynomials[index].evaluate(x)
    }

    fn check_knots_spacing(&mut self) {
        let first_spacing = self.knots[1].x - self.knots[0].x;

        self.is_knot_spacing_uniform = self.knots
            .windows(2)
            .map(|w| w[1].x - w[0].x)
            .all(|spacing| (spacing - first_spacing).abs() <= 1e-12 * first_spacing);
    }

    fn calculate_polynomials(&mut self) -> Result<(), SplineError> {
        let size = self.knots.len();
        let number_of_intervals = size - 1;

        let spacing = DVector::<f64>::from_fn(number_of_intervals, |i, _| {
            self.knots[i + 1].x - self.knots[i].x
        });
        let secant_slope = DVector::<f64>::from_fn(number_of_intervals, |i, _| {
            (self.knots[i + 1].y - self.knots[i].y) / spacing[i]
        });

        let slopes = solve_tridiagonal(knot_slope_system(&self.knots, &spacing, &secant_slope))?;

        for i in 0..number_of_intervals {
            let h = spacing[i];
            let t = (slopes[i] + slopes[i + 1] - 2.0 * secant_slope[i]) / h;
            let coefficients = Vector4::new(
                self.knots[i].y,
                slopes[i],
                (secant_slope[i] - slopes[i]) / h - t,
                t / h,
            );
            self.polynomials.push(Polynomial::new(self.knots[i].x, coefficients));
        }
        Ok(())
    }

    fn find_segment_index(&self, x: f64) -> usize {
        let size = self.knots.len();
        if x < self.knots[1].x {
            0
        } else if x >= self.knots[size - 2].x {
            size - 2
        } else if self.is_knot_spacing_uniform {
            self.find_interval_index_uniform(x)
        } else {
            self.find_interval_index_bisect(x)
        }
    }

    fn find_interval_index_bisect(&self, x: f64) -> usize {
        let size = self.knots.len();
        let mut min = 0;
        let mut max = size - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.knots[mid].x {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_interval_index_uniform(&self, x: f64) -> usize {
        let last_interval = self.knots.len() - 2;
        let relative_x = (x - self.min_x) / (self.max_x - self.min_x);
        let mut index = ((relative_x * (last_interval + 1) as f64).floor() as usize).min(last_interval);

        // rounding may land one interval off next to a knot
        if x < self.knots[index].x && index > 0 {
            index -= 1;
        } else if index < last_interval && x >= self.knots[index + 1].x {
            index += 1;
        }
        index
    }

    fn find_segment_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.is_in_segment(index_hint, x) {
            return index_hint;
        }
        if index_hint + 1 < self.polynomials.len() && self.is_in_segment(index_hint + 1, x) {
            return index_hint + 1;
        }
        trace!(index_hint, x, "segment hint missed");
        self.find_segment_index(x)
    }

    fn is_in_segment(&self, index: usize, x: f64) -> bool {
        let last = self.polynomials.len() - 1;
        let above_start = index == 0 || self.knots[index].x <= x;
        let below_end = index == last || x < self.knots[index + 1].x;
        above_start && below_end
    }
}

fn check_samples(samples: &[Sample]) -> Result<(), SplineError> {
    if let Some((index, sample)) = samples.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(SplineError::DegenerateInput { index, x: sample.x, y: sample.y });
    }

    if let Some(index) = (1..samples.len()).find(|i| samples[*i].x <= samples[i - 1].x) {
        return Err(SplineError::NonMonotonicInput {
            index,
            previous: samples[index - 1].x,
            current: samples[index].x,
        });
    }

    if samples.len() < MIN_SAMPLES {
        return Err(SplineError::InsufficientSamples { got: samples.len(), required: MIN_SAMPLES });
    }
    Ok(())
}

fn check_query(x: f64) -> Result<(), SplineError> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(SplineError::NonFiniteQuery { x })
    }
}

/// Bands and right hand side of a tridiagonal system.
struct TridiagonalSystem {
    lower: DVector<f64>,
    diag: DVector<f64>,
    upper: DVector<f64>,
    rhs: DVector<f64>,
}

/// System for the first derivative at every knot. Interior rows enforce C2 continuity,
/// first and last rows make the third derivative continuous at the second and second to
/// last knot.
fn knot_slope_system(
    knots: &[Sample],
    spacing: &DVector<f64>,
    secant_slope: &DVector<f64>,
) -> TridiagonalSystem {
    let size = knots.len();
    let mut system = TridiagonalSystem {
        lower: DVector::zeros(size),
        diag: DVector::zeros(size),
        upper: DVector::zeros(size),
        rhs: DVector::zeros(size),
    };

    for i in 1..size - 1 {
        system.lower[i] = spacing[i];
        system.diag[i] = 2.0 * (spacing[i - 1] + spacing[i]);
        system.upper[i] = spacing[i - 1];
        system.rhs[i] = 3.0 * (spacing[i] * secant_slope[i - 1] + spacing[i - 1] * secant_slope[i]);
    }

    let d = knots[2].x - knots[0].x;
    system.diag[0] = spacing[1];
    system.upper[0] = d;
    system.rhs[0] = ((spacing[0] + 2.0 * d) * spacing[1] * secant_slope[0]
        + spacing[0].powi(2) * secant_slope[1])
        / d;

    let n = size - 1;
    let d = knots[n].x - knots[n - 2].x;
    system.diag[n] = spacing[n - 2];
    system.lower[n] = d;
    system.rhs[n] = (spacing[n - 1].powi(2) * secant_slope[n - 2]
        + (2.0 * d + spacing[n - 1]) * spacing[n - 2] * secant_slope[n - 1])
        / d;

    system
}

/// Thomas algorithm. `lower[0]` and `upper[size - 1]` are ignored.
fn solve_tridiagonal(system: TridiagonalSystem) -> Result<DVector<f64>, SplineError> {
    let TridiagonalSystem { lower, diag, upper, rhs } = system;
    let size = diag.len();
    let mut upper_prime = DVector::<f64>::zeros(size);
    let mut rhs_prime = DVector::<f64>::zeros(size);

    for i in 0..size {
        let (previous_upper, previous_rhs) = if i == 0 {
            (0.0, 0.0)
        } else {
            (upper_prime[i - 1], rhs_prime[i - 1])
        };
        let pivot = diag[i] - lower[i] * previous_upper;
        if pivot == 0.0 || !pivot.is_finite() {
            return Err(SplineError::SingularSystem { row: i });
        }
        if i + 1 < size {
            upper_prime[i] = upper[i] / pivot;
        }
        rhs_prime[i] = (rhs[i] - lower[i] * previous_rhs) / pivot;
    }

    let mut solution = DVector::<f64>::zeros(size);
    solution[size - 1] = rhs_prime[size - 1];
    for i in (0..size - 1).rev() {
        solution[i] = rhs_prime[i] - upper_prime[i] * solution[i + 1];
    }
    Ok(solution)
}
