use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArithError {
    #[error("Division by zero: cannot divide {dividend} by zero")]
    DivisionByZero { dividend: f64 },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl ArithError {
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, ArithError::DivisionByZero { .. })
    }
}

pub type Result<T> = std::result::Result<T, ArithError>;
