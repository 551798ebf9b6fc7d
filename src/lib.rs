//! Floating-point multiplication and division with a zero-divisor guard.

pub mod config;
pub mod ops;
pub mod utils;

pub use config::ArithConfig;
pub use ops::{divide, multiply, Arithmetic};
pub use utils::error::{ArithError, Result};
