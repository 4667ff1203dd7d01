//! Fitted forecasting models and the training-time selection policy

use crate::error::{PlannerError, Result};
use plan_math::smoothing::{HoltLinear, HoltWinters};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Length of the repeating cycle captured by the seasonal variant
pub const SEASONAL_PERIOD: usize = 12;

/// Minimum observations before a seasonal component is estimated.
/// Below two full years the cycle cannot be separated from noise, so the
/// trend-only variant is used instead.
pub const SEASONAL_MIN_OBSERVATIONS: usize = 2 * SEASONAL_PERIOD;

/// Minimum observations to fit any variant at all
pub const MIN_OBSERVATIONS: usize = 2;

/// A model fitted to exactly one KPI series at training time
///
/// The variant is chosen once, offline, from the length of the training
/// series and is immutable thereafter. Forecasting is a pure function of
/// the fitted state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum FittedModel {
    /// Additive Holt-Winters with a 12-month cycle
    Seasonal(HoltWinters),
    /// Holt linear trend for short histories
    Trend(HoltLinear),
}

impl FittedModel {
    /// Train a model on a monthly series, choosing the variant from its length
    pub fn train(values: &[f64]) -> Result<Self> {
        if values.len() < MIN_OBSERVATIONS {
            return Err(PlannerError::InsufficientData(format!(
                "Need at least {} observations to fit a model, got {}",
                MIN_OBSERVATIONS,
                values.len()
            )));
        }

        let model = if values.len() >= SEASONAL_MIN_OBSERVATIONS {
            FittedModel::Seasonal(HoltWinters::fit(values, SEASONAL_PERIOD)?)
        } else {
            FittedModel::Trend(HoltLinear::fit(values)?)
        };

        debug!(
            observations = values.len(),
            seasonal = model.is_seasonal(),
            "fitted model"
        );
        Ok(model)
    }

    /// Point forecasts for the next `horizon` months
    pub fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        if horizon == 0 {
            return Err(PlannerError::InvalidHorizon(
                "Horizon must be a positive number of months".to_string(),
            ));
        }

        let values = match self {
            FittedModel::Seasonal(model) => model.forecast(horizon),
            FittedModel::Trend(model) => model.forecast(horizon),
        };
        Ok(values)
    }

    /// Whether the seasonal variant was selected at training time
    pub fn is_seasonal(&self) -> bool {
        matches!(self, FittedModel::Seasonal(_))
    }
}
