/// Coefficients of the equation `a·x² + b·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Coefficients {
    /// Leading coefficient, multiplying `x²`.
    pub a: f64,
    /// Linear coefficient, multiplying `x`.
    pub b: f64,
    /// Constant term.
    pub c: f64,
}

impl Coefficients {
    /// Creates coefficients for `a·x² + b·x + c`.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Returns `true` if none of the coefficients is NaN or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    /// Evaluates the polynomial `a·x² + b·x + c` at `x`.
    ///
    /// For a root returned by the solver this is the residual, which is
    /// zero up to rounding.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Computes `b² − 4·a·c`.
    pub(super) fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Divides every coefficient by the largest magnitude among them.
    ///
    /// Returns the scaled coefficients, all within `[-1, 1]`, and the
    /// magnitude used. The scaled equation has the same roots. Assumes the
    /// coefficients are finite and not all zero.
    pub(super) fn normalized(&self) -> (Self, f64) {
        let magnitude = self.a.abs().max(self.b.abs()).max(self.c.abs());
        let scaled = Self::new(self.a / magnitude, self.b / magnitude, self.c / magnitude);
        (scaled, magnitude)
    }
}

impl From<(f64, f64, f64)> for Coefficients {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        Self::new(a, b, c)
    }
}

impl From<[f64; 3]> for Coefficients {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self::new(a, b, c)
    }
}
