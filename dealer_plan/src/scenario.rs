//! What-if scenario recomputation over a baseline plan

use crate::error::{PlannerError, Result};
use crate::planner::PlanResult;
use std::collections::BTreeMap;

/// User-supplied unit-sales overrides, one interactive request's worth
pub type Scenario = BTreeMap<String, i64>;

/// Recompute a plan with unit-sales overrides applied to every period
///
/// Only Revenue and Profit move with unit sales; Expense and Payroll keep
/// their baseline trend. For each period, each overridden vehicle replaces
/// its baseline unit forecast and shifts Revenue by
/// `(override - baseline_units) * contribution`, after which Profit is
/// recomputed as Revenue - (Expense + Payroll).
pub fn apply_scenario(
    baseline: &PlanResult,
    overrides: &Scenario,
    contributions: &BTreeMap<String, f64>,
) -> Result<PlanResult> {
    for (vehicle, &units) in overrides {
        if !contributions.contains_key(vehicle) {
            return Err(PlannerError::UnknownKpi(vehicle.clone()));
        }
        if units < 0 {
            return Err(PlannerError::InvalidOverride(format!(
                "Unit count for '{}' must be non-negative, got {}",
                vehicle, units
            )));
        }
    }

    let mut plan = baseline.clone();
    for row in &mut plan.rows {
        let mut delta = 0.0;
        for (vehicle, &units) in overrides {
            let baseline_units = row
                .units
                .get(vehicle)
                .copied()
                .ok_or_else(|| PlannerError::UnknownKpi(vehicle.clone()))?;
            delta += (units as f64 - baseline_units) * contributions[vehicle];
            row.units.insert(vehicle.clone(), units as f64);
        }
        row.revenue += delta;
        row.profit = row.revenue - (row.expense + row.payroll);
    }

    Ok(plan)
}
