//! Exponential smoothing implementations for monthly forecasting
//!
//! Contains the two model variants used by the planner:
//! - Holt linear trend (double exponential smoothing)
//! - Additive Holt-Winters (triple exponential smoothing)
//!
//! Smoothing parameters are chosen by a deterministic grid search over the
//! one-step-ahead sum of squared errors, so fitting the same series always
//! produces the same model.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Candidate values searched for each smoothing parameter during fitting.
const PARAM_GRID: [f64; 9] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

fn validate_param(name: &str, value: f64) -> Result<()> {
    if value <= 0.0 || value >= 1.0 {
        return Err(MathError::InvalidInput(format!(
            "{} must be between 0 and 1 (exclusive), got {}",
            name, value
        )));
    }
    Ok(())
}

/// Holt linear-trend model (double exponential smoothing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoltLinear {
    alpha: f64,
    beta: f64,
    level: f64,
    trend: f64,
}

impl HoltLinear {
    /// Fit a linear-trend model, choosing parameters by grid search
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(MathError::InsufficientData(format!(
                "Holt linear fit needs at least 2 observations, got {}",
                values.len()
            )));
        }

        let mut best = (PARAM_GRID[0], PARAM_GRID[0]);
        let mut best_sse = f64::INFINITY;
        for &alpha in &PARAM_GRID {
            for &beta in &PARAM_GRID {
                let sse = Self::one_step_sse(values, alpha, beta);
                if sse < best_sse {
                    best_sse = sse;
                    best = (alpha, beta);
                }
            }
        }

        Self::fit_with_params(values, best.0, best.1)
    }

    /// Fit with fixed smoothing parameters
    pub fn fit_with_params(values: &[f64], alpha: f64, beta: f64) -> Result<Self> {
        validate_param("alpha", alpha)?;
        validate_param("beta", beta)?;
        if values.len() < 2 {
            return Err(MathError::InsufficientData(format!(
                "Holt linear fit needs at least 2 observations, got {}",
                values.len()
            )));
        }

        let (level, trend) = Self::smooth(values, alpha, beta);
        Ok(Self {
            alpha,
            beta,
            level,
            trend,
        })
    }

    /// Run the update equations over the series, returning the final state
    fn smooth(values: &[f64], alpha: f64, beta: f64) -> (f64, f64) {
        // Initial state: first observation and first difference
        let mut level = values[0];
        let mut trend = values[1] - values[0];

        for &y in &values[1..] {
            let prev_level = level;
            level = alpha * y + (1.0 - alpha) * (prev_level + trend);
            trend = beta * (level - prev_level) + (1.0 - beta) * trend;
        }

        (level, trend)
    }

    /// Sum of squared one-step-ahead errors for the given parameters
    fn one_step_sse(values: &[f64], alpha: f64, beta: f64) -> f64 {
        let mut level = values[0];
        let mut trend = values[1] - values[0];
        let mut sse = 0.0;

        for &y in &values[1..] {
            let forecast = level + trend;
            let error = y - forecast;
            sse += error * error;

            let prev_level = level;
            level = alpha * y + (1.0 - alpha) * (prev_level + trend);
            trend = beta * (level - prev_level) + (1.0 - beta) * trend;
        }

        sse
    }

    /// Forecast `horizon` steps ahead from the fitted state
    pub fn forecast(&self, horizon: usize) -> Vec<f64> {
        (1..=horizon)
            .map(|h| self.level + h as f64 * self.trend)
            .collect()
    }

    /// Get the fitted level smoothing parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the fitted trend smoothing parameter
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Get the final level
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Get the final trend
    pub fn trend(&self) -> f64 {
        self.trend
    }
}

/// Additive Holt-Winters model (triple exponential smoothing)
///
/// The update equations for additive seasonality with period m:
/// - Level: `l_t = alpha * (y_t - s_{t-m}) + (1 - alpha) * (l_{t-1} + b_{t-1})`
/// - Trend: `b_t = beta * (l_t - l_{t-1}) + (1 - beta) * b_{t-1}`
/// - Seasonal: `s_t = gamma * (y_t - l_t) + (1 - gamma) * s_{t-m}`
/// - Forecast: `y_{t+h} = l_t + h * b_t + s_{t+h-m}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoltWinters {
    alpha: f64,
    beta: f64,
    gamma: f64,
    period: usize,
    level: f64,
    trend: f64,
    seasonals: Vec<f64>,
    /// Cycle position of the first step after the training data
    phase: usize,
}

impl HoltWinters {
    /// Fit a seasonal model, choosing parameters by grid search
    pub fn fit(values: &[f64], period: usize) -> Result<Self> {
        Self::validate_series(values, period)?;

        let mut best = (PARAM_GRID[0], PARAM_GRID[0], PARAM_GRID[0]);
        let mut best_sse = f64::INFINITY;
        for &alpha in &PARAM_GRID {
            for &beta in &PARAM_GRID {
                for &gamma in &PARAM_GRID {
                    let sse = Self::one_step_sse(values, period, alpha, beta, gamma);
                    if sse < best_sse {
                        best_sse = sse;
                        best = (alpha, beta, gamma);
                    }
                }
            }
        }

        Self::fit_with_params(values, period, best.0, best.1, best.2)
    }

    /// Fit with fixed smoothing parameters
    pub fn fit_with_params(
        values: &[f64],
        period: usize,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Result<Self> {
        validate_param("alpha", alpha)?;
        validate_param("beta", beta)?;
        validate_param("gamma", gamma)?;
        Self::validate_series(values, period)?;

        let (level, trend, seasonals) = Self::smooth(values, period, alpha, beta, gamma);
        Ok(Self {
            alpha,
            beta,
            gamma,
            period,
            level,
            trend,
            seasonals,
            phase: values.len() % period,
        })
    }

    fn validate_series(values: &[f64], period: usize) -> Result<()> {
        if period < 2 {
            return Err(MathError::InvalidInput(format!(
                "Seasonal period must be at least 2, got {}",
                period
            )));
        }
        if values.len() < 2 * period {
            return Err(MathError::InsufficientData(format!(
                "Holt-Winters fit needs at least two full seasons ({} observations), got {}",
                2 * period,
                values.len()
            )));
        }
        Ok(())
    }

    /// Initial state from the first two seasons
    fn initial_state(values: &[f64], period: usize) -> (f64, f64, Vec<f64>) {
        // Level: average of the first season
        let level = values[..period].iter().sum::<f64>() / period as f64;

        // Trend: averaged month-over-year difference between the first two seasons
        let trend = (0..period)
            .map(|i| (values[period + i] - values[i]) / period as f64)
            .sum::<f64>()
            / period as f64;

        // Seasonal indices: first-season deviations, kept summing to zero
        let mut seasonals: Vec<f64> = values[..period].iter().map(|y| y - level).collect();
        let mean = seasonals.iter().sum::<f64>() / period as f64;
        for s in seasonals.iter_mut() {
            *s -= mean;
        }

        (level, trend, seasonals)
    }

    /// Run the update equations over the series, returning the final state
    fn smooth(
        values: &[f64],
        period: usize,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> (f64, f64, Vec<f64>) {
        let (mut level, mut trend, mut seasonals) = Self::initial_state(values, period);

        for (t, &y) in values.iter().enumerate().skip(period) {
            let idx = t % period;
            let s = seasonals[idx];
            let prev_level = level;
            level = alpha * (y - s) + (1.0 - alpha) * (prev_level + trend);
            trend = beta * (level - prev_level) + (1.0 - beta) * trend;
            seasonals[idx] = gamma * (y - level) + (1.0 - gamma) * s;
        }

        (level, trend, seasonals)
    }

    /// Sum of squared one-step-ahead errors for the given parameters
    fn one_step_sse(values: &[f64], period: usize, alpha: f64, beta: f64, gamma: f64) -> f64 {
        let (mut level, mut trend, mut seasonals) = Self::initial_state(values, period);
        let mut sse = 0.0;

        for (t, &y) in values.iter().enumerate().skip(period) {
            let idx = t % period;
            let s = seasonals[idx];

            let forecast = level + trend + s;
            let error = y - forecast;
            sse += error * error;

            let prev_level = level;
            level = alpha * (y - s) + (1.0 - alpha) * (prev_level + trend);
            trend = beta * (level - prev_level) + (1.0 - beta) * trend;
            seasonals[idx] = gamma * (y - level) + (1.0 - gamma) * s;
        }

        sse
    }

    /// Forecast `horizon` steps ahead from the fitted state
    pub fn forecast(&self, horizon: usize) -> Vec<f64> {
        (1..=horizon)
            .map(|h| {
                let idx = (self.phase + h - 1) % self.period;
                self.level + h as f64 * self.trend + self.seasonals[idx]
            })
            .collect()
    }

    /// Get the seasonal period
    pub fn period(&self) -> usize {
        self.period
    }

    /// Get the fitted seasonal indices
    pub fn seasonals(&self) -> &[f64] {
        &self.seasonals
    }

    /// Get the final level
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Get the final trend
    pub fn trend(&self) -> f64 {
        self.trend
    }
}
