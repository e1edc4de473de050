//! Real roots of quadratic equations.
//!
//! Solves `a·x² + b·x + c = 0` for real `x` using the discriminant
//! `d = b² − 4·a·c`. Floating-point values are compared against an absolute
//! tolerance ([`EPSILON`] by default) instead of exact zero:
//!
//! - `d ≤ −ε` — no real roots
//! - `|d| < ε` — one repeated root, `−b / 2a`
//! - otherwise (`d ≥ ε`) — two roots, `(−b + √d) / 2a` then `(−b − √d) / 2a`
//!
//! The no-roots test is inclusive. A discriminant of exactly `−ε` is outside
//! the open zero band `(−ε, ε)` and is reported as having no real roots,
//! rather than falling through to the two-root branch where `√d` would be
//! taken of a negative number.
//!
//! Coefficients must be finite and the leading coefficient must satisfy
//! `|a| ≥ ε`; anything else is rejected before the discriminant is computed.
//!
//! When `b²` or `4·a·c` overflows, the equation is divided through by its
//! largest coefficient magnitude `m`, which leaves the roots unchanged. The
//! discriminant of the scaled equation is `d / m²`, so it is classified
//! against the band `ε / m²`. Roots whose magnitude exceeds [`f64::MAX`] are
//! reported as infinities.

mod coefficients;
mod config;
mod error;
mod roots;

pub use coefficients::Coefficients;
pub use config::Config;
pub use error::{ConfigError, Error};
pub use roots::Roots;

use quadra_core::Model;

/// Default absolute tolerance for treating a value as zero.
pub const EPSILON: f64 = 1e-10;

/// Quadratic equation solver with a fixed tolerance.
///
/// The tolerance is chosen at construction and cannot change afterwards.
/// Callers that need a different tolerance build a separate solver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuadraticSolver {
    config: Config,
}

impl QuadraticSolver {
    /// Creates a solver using the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config
            .validate()
            .map_err(|reason| ConfigError { reason })?;

        Ok(Self { config })
    }

    /// Returns the solver's configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Finds the real roots of `a·x² + b·x + c = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteCoefficient`] if any coefficient is NaN or
    /// infinite, or [`Error::ZeroLeadingCoefficient`] if `a` is within
    /// tolerance of zero. The finiteness check runs first.
    pub fn solve(&self, a: f64, b: f64, c: f64) -> Result<Roots, Error> {
        let coefficients = Coefficients::new(a, b, c);

        if !coefficients.is_finite() {
            return Err(Error::NonFiniteCoefficient { a, b, c });
        }

        if self.config.is_zero(a) {
            return Err(Error::ZeroLeadingCoefficient { a });
        }

        Ok(self.real_roots(&coefficients))
    }

    /// Classifies the discriminant and computes the roots.
    ///
    /// Assumes the coefficients are finite and `a` is not zero.
    fn real_roots(&self, coefficients: &Coefficients) -> Roots {
        let epsilon = self.config.epsilon;

        let d = coefficients.discriminant();
        if d.is_finite() {
            return roots_from_discriminant(coefficients, d, epsilon);
        }

        // `b²` or `4·a·c` overflowed.
        let (scaled, magnitude) = coefficients.normalized();
        let band = epsilon / (magnitude * magnitude);
        roots_from_discriminant(&scaled, scaled.discriminant(), band)
    }
}

/// Computes the roots given a finite discriminant and its zero band.
///
/// A band of zero (reachable only for overflowing coefficients) reduces
/// the classification to the sign of `d`.
fn roots_from_discriminant(coefficients: &Coefficients, d: f64, band: f64) -> Roots {
    let Coefficients { a, b, .. } = *coefficients;

    if d < 0.0 && d <= -band {
        return Roots::No([]);
    }

    if d == 0.0 || d.abs() < band {
        return Roots::One([-b / (2.0 * a)]);
    }

    let sqrt_d = d.sqrt();
    let x1 = (-b + sqrt_d) / (2.0 * a);
    let x2 = (-b - sqrt_d) / (2.0 * a);

    Roots::Two([x1, x2])
}

impl Model for QuadraticSolver {
    type Input = Coefficients;
    type Output = Roots;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input.a, input.b, input.c)
    }
}

/// Finds the real roots of `a·x² + b·x + c = 0` using the default tolerance.
///
/// Equivalent to `QuadraticSolver::default().solve(a, b, c)`.
///
/// # Errors
///
/// Returns an error if any coefficient is non-finite or `a` is zero.
pub fn solve(a: f64, b: f64, c: f64) -> Result<Roots, Error> {
    QuadraticSolver::default().solve(a, b, c)
}
