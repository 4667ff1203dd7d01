//! # Plan Math
//!
//! Mathematical calculations for KPI forecasting. This crate provides
//! implementations of the exponential smoothing family of models used
//! for monthly business planning.

use thiserror::Error;

// Model modules
pub mod smoothing;

/// Errors that can occur in forecasting-related calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for planning math operations
pub type Result<T> = std::result::Result<T, MathError>;
