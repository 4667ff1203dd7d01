//! Linear inversion from a profit target to required unit sales

use crate::error::{PlannerError, Result};
use crate::planner::PlanResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unit sales required to reach a profit target in one forecast month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetPlan {
    /// Uniform ratio applied to every baseline unit forecast
    pub scale: f64,
    /// Whole-unit requirements after rounding and clamping
    pub required_units: BTreeMap<String, u64>,
    /// Profit implied by the rounded requirements
    pub projected_profit: f64,
    pub target_profit: f64,
    /// True when a negative requirement was clamped to zero, making the
    /// projection a best-effort figure rather than the target
    pub clamped: bool,
}

impl TargetPlan {
    /// Whether the rounded plan reaches the target
    pub fn meets_target(&self) -> bool {
        self.projected_profit + 1e-6 >= self.target_profit
    }
}

/// Solve for the unit sales that reach `target_profit` in one period
///
/// Profit is treated as affine in total units with the vehicle mix held
/// fixed: every baseline unit forecast is scaled by the same ratio
/// `1 + (target - baseline_profit) / sum(units * contribution)`. When
/// profit does not respond to unit sales at all, only the baseline profit
/// itself is reachable.
pub fn solve_for_target(
    target_profit: f64,
    baseline: &PlanResult,
    contributions: &BTreeMap<String, f64>,
    period: usize,
) -> Result<TargetPlan> {
    let row = baseline.row(period)?;

    let sensitivity: f64 = contributions
        .iter()
        .map(|(vehicle, contribution)| {
            row.units.get(vehicle).copied().unwrap_or(0.0) * contribution
        })
        .sum();

    let gap = target_profit - row.profit;
    let scale = if sensitivity == 0.0 {
        if gap.abs() > f64::EPSILON {
            return Err(PlannerError::UnsatisfiableTarget(format!(
                "Profit does not respond to unit sales; cannot move from {} to {}",
                row.profit, target_profit
            )));
        }
        1.0
    } else {
        1.0 + gap / sensitivity
    };

    let mut clamped = false;
    let mut required_units = BTreeMap::new();
    let mut projected_profit = row.profit;
    for (vehicle, contribution) in contributions {
        let baseline_units = row.units.get(vehicle).copied().unwrap_or(0.0);
        let scaled = scale * baseline_units;
        let required = if scaled < 0.0 {
            clamped = true;
            0.0
        } else {
            scaled.round()
        };
        projected_profit += (required - baseline_units) * contribution;
        required_units.insert(vehicle.clone(), required as u64);
    }

    Ok(TargetPlan {
        scale,
        required_units,
        projected_profit,
        target_profit,
        clamped,
    })
}
