use nalgebra::Vector4;

/// Cubic on one knot interval, in powers of `x - origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    origin: f64,
    coefficients: Vector4<f64>,
}

impl Polynomial {

    pub fn new(origin: f64, coefficients: Vector4<f64>) -> Self {
        Polynomial { origin, coefficients }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let dx = x - self.origin;
        let c = &self.coefficients;
        c[0] + dx * (c[1] + dx * (c[2] + dx * c[3]))
    }

    pub fn derivative(&self, x: f64, order: usize) -> f64 {
        let dx = x - self.origin;
        let c = &self.coefficients;
        match order {
            0 => self.evaluate(x),
            1 => c[1] + dx * (2.0 * c[2] + dx * 3.0 * c[3]),
            2 => 2.0 * c[2] + 6.0 * c[3] * dx,
            3 => 6.0 * c[3],
            _ => 0.0,
        }
    }

    pub fn coefficients(&self) -> &Vector4<f64> {
        &self.coefficients
    }
}
