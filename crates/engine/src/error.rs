//! The module contains the errors the engine can return.
//!
//! Calculators never fail: zero incomes, zero expenses and a zero minimum
//! wage are defined branches. Errors only come from parsing user input:
//!
//! - [`InvalidAmount`] when a money amount cannot be parsed.
//! - [`InvalidMethod`] when a division method tag is unknown.
//! - [`ShareParams`] when a share link fails strict validation.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidMethod`]: EngineError::InvalidMethod
//!  [`ShareParams`]: EngineError::ShareParams
use thiserror::Error;

use crate::share::ShareParamsError;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid division method: {0}")]
    InvalidMethod(String),
    #[error(transparent)]
    ShareParams(#[from] ShareParamsError),
}
