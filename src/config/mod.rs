use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative, Validate};
use serde::Deserialize;

/// Tunables for [`crate::Arithmetic`].
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArithConfig {
    /// A divisor whose magnitude is at or below this value counts as zero.
    zero_tolerance: f64,
}

impl Default for ArithConfig {
    fn default() -> Self {
        Self {
            zero_tolerance: 0.0,
        }
    }
}

impl ArithConfig {
    pub fn zero_tolerance(&self) -> f64 {
        self.zero_tolerance
    }

    pub fn with_zero_tolerance(zero_tolerance: f64) -> Result<Self> {
        let config = Self { zero_tolerance };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ArithConfig = toml::from_str(content)?;
        config.validate()?;
        tracing::debug!(zero_tolerance = config.zero_tolerance, "Loaded arithmetic config");
        Ok(config)
    }
}

impl Validate for ArithConfig {
    fn validate(&self) -> Result<()> {
        validate_non_negative("zero_tolerance", self.zero_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exact_zero() {
        assert_eq!(ArithConfig::default().zero_tolerance(), 0.0);
    }

    #[test]
    fn test_from_toml_str() {
        let config = ArithConfig::from_toml_str("zero_tolerance = 1e-12").unwrap();
        assert_eq!(config.zero_tolerance(), 1e-12);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ArithConfig::from_toml_str("").unwrap();
        assert_eq!(config, ArithConfig::default());
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let err = ArithConfig::from_toml_str("zero_tolerance = -0.5").unwrap_err();
        assert!(matches!(err, crate::ArithError::InvalidConfigValue { .. }));
        assert!(ArithConfig::with_zero_tolerance(-1.0).is_err());
        assert!(ArithConfig::with_zero_tolerance(f64::NAN).is_err());
        assert!(ArithConfig::with_zero_tolerance(f64::INFINITY).is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = ArithConfig::from_toml_str("zero_tolerance = \"tiny\"").unwrap_err();
        assert!(matches!(err, crate::ArithError::ConfigParse(_)));
    }
}
