//! Error types for the dealer_plan crate

use thiserror::Error;

/// Custom error types for the dealer_plan crate
///
/// Every planner entry point reports failures synchronously through these
/// kinds; no error is fatal to the process and a failed request leaves the
/// shared model bank untouched.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Forecast horizon was zero or otherwise unusable
    #[error("Invalid horizon: {0}")]
    InvalidHorizon(String),

    /// A series was too short to fit any model variant
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A KPI name outside the tracked set
    #[error("Unknown KPI: {0}")]
    UnknownKpi(String),

    /// A scenario override that is not a non-negative unit count
    #[error("Invalid override: {0}")]
    InvalidOverride(String),

    /// A profit target the current plan cannot reach
    #[error("Unsatisfiable target: {0}")]
    UnsatisfiableTarget(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to input validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from model bank serialization
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from the smoothing calculations
    #[error("Math error: {0}")]
    MathError(#[from] plan_math::MathError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, PlannerError>;
