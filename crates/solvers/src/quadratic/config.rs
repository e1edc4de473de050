use super::EPSILON;

/// Configuration for the quadratic solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Absolute tolerance below which a value is treated as zero.
    ///
    /// Applies to both the leading coefficient and the discriminant.
    pub epsilon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

impl Config {
    /// Validates that the tolerance is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is non-finite, zero, or negative.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err("epsilon must be finite and positive");
        }
        Ok(())
    }

    /// Returns `true` if `value` is within tolerance of zero.
    ///
    /// The comparison is strict: `|value| == epsilon` is not zero.
    #[must_use]
    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() < self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_module_epsilon() {
        let config = Config::default();
        assert_eq!(config.epsilon.to_bits(), 1e-10_f64.to_bits());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_tolerances() {
        for epsilon in [0.0, -1e-10, f64::NAN, f64::INFINITY] {
            let config = Config { epsilon };
            assert!(config.validate().is_err(), "epsilon = {epsilon}");
        }
    }

    #[test]
    fn zero_check_is_strict() {
        let config = Config::default();

        assert!(config.is_zero(0.0));
        assert!(config.is_zero(-0.0));
        assert!(config.is_zero(9.99e-11));
        assert!(config.is_zero(-9.99e-11));

        assert!(!config.is_zero(EPSILON));
        assert!(!config.is_zero(-EPSILON));
        assert!(!config.is_zero(1.0));
    }
}
