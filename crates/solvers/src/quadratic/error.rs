use thiserror::Error;

/// Errors that can occur when solving a quadratic equation.
///
/// Both variants describe invalid input. Retrying with the same
/// coefficients always fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("coefficients must be finite numbers: a = {a}, b = {b}, c = {c}")]
    NonFiniteCoefficient { a: f64, b: f64, c: f64 },

    #[error("coefficient `a` cannot be zero: a = {a}")]
    ZeroLeadingCoefficient { a: f64 },
}

/// Error returned when a solver is built from an invalid [`Config`].
///
/// [`Config`]: super::Config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid config: {reason}")]
pub struct ConfigError {
    pub reason: &'static str,
}
