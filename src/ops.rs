use crate::config::ArithConfig;
use crate::utils::error::{ArithError, Result};
use crate::utils::validation::Validate;

/// Returns the product of `x` and `y`.
pub fn multiply(x: f64, y: f64) -> f64 {
    Arithmetic::default().multiply(x, y)
}

/// Returns `x / y`, or [`ArithError::DivisionByZero`] when `y` is zero.
///
/// Both `0.0` and `-0.0` are rejected. A NaN divisor is not zero and
/// propagates through the division as usual.
pub fn divide(x: f64, y: f64) -> Result<f64> {
    Arithmetic::default().divide(x, y)
}

/// The arithmetic helpers bound to an [`ArithConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic {
    config: ArithConfig,
}

impl Arithmetic {
    /// Fails if `config` carries a tolerance that is negative or not finite,
    /// which can happen when it was deserialized outside [`ArithConfig::from_toml_str`].
    pub fn new(config: ArithConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ArithConfig {
        &self.config
    }

    pub fn multiply(&self, x: f64, y: f64) -> f64 {
        let product = x * y;
        tracing::trace!(x, y, product, "multiply");
        product
    }

    pub fn divide(&self, x: f64, y: f64) -> Result<f64> {
        if self.is_zero(y) {
            tracing::debug!(dividend = x, divisor = y, "Rejected division by zero");
            return Err(ArithError::DivisionByZero { dividend: x });
        }

        let quotient = x / y;
        tracing::trace!(x, y, quotient, "divide");
        Ok(quotient)
    }

    fn is_zero(&self, value: f64) -> bool {
        value == 0.0 || value.abs() <= self.config.zero_tolerance()
    }
}
