use assert_approx_eq::assert_approx_eq;
use chrono::NaiveDate;
use dealer_plan::goal_seek::solve_for_target;
use dealer_plan::planner::{PlanResult, PlanRow};
use dealer_plan::PlannerError;
use std::collections::BTreeMap;

fn contributions() -> BTreeMap<String, f64> {
    [
        ("Outlander", 1000.0),
        ("RVR", 800.0),
        ("Eclipse Cross", 600.0),
        ("Mirage", 500.0),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect()
}

fn baseline() -> PlanResult {
    let units: BTreeMap<String, f64> = [
        ("Outlander", 100.0),
        ("RVR", 50.0),
        ("Eclipse Cross", 30.0),
        ("Mirage", 20.0),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect();

    let rows = (0..3)
        .map(|i| PlanRow {
            period: NaiveDate::from_ymd_opt(2024, 1 + i as u32, 1).unwrap(),
            revenue: 500_000.0 + 1_000.0 * i as f64,
            expense: 300_000.0,
            payroll: 150_000.0,
            profit: 50_000.0 + 1_000.0 * i as f64,
            units: units.clone(),
        })
        .collect();

    PlanResult { rows }
}

#[test]
fn target_equal_to_baseline_needs_no_change() {
    let plan = solve_for_target(50_000.0, &baseline(), &contributions(), 0).unwrap();

    assert_approx_eq!(plan.scale, 1.0);
    assert_eq!(plan.required_units["Outlander"], 100);
    assert_eq!(plan.required_units["RVR"], 50);
    assert_eq!(plan.required_units["Eclipse Cross"], 30);
    assert_eq!(plan.required_units["Mirage"], 20);
    assert_approx_eq!(plan.projected_profit, 50_000.0);
    assert!(!plan.clamped);
    assert!(plan.meets_target());
}

#[test]
fn uniform_scaling_reaches_the_target() {
    let plan = solve_for_target(55_000.0, &baseline(), &contributions(), 0).unwrap();

    // Sensitivity: 100*1000 + 50*800 + 30*600 + 20*500 = 161000
    assert_approx_eq!(plan.scale, 1.0 + 5_000.0 / 161_000.0, 1e-9);
    assert_eq!(plan.required_units["Outlander"], 103);
    assert_eq!(plan.required_units["RVR"], 52);
    assert_eq!(plan.required_units["Eclipse Cross"], 31);
    assert_eq!(plan.required_units["Mirage"], 21);

    // Rounded plan: +3, +2, +1, +1 units over the baseline
    assert_approx_eq!(plan.projected_profit, 55_700.0);
    assert!(!plan.clamped);
    assert!(plan.meets_target());
}

#[test]
fn solves_against_the_selected_period() {
    // Period 2 has a 52000 baseline profit
    let plan = solve_for_target(57_000.0, &baseline(), &contributions(), 2).unwrap();

    assert_approx_eq!(plan.scale, 1.0 + 5_000.0 / 161_000.0, 1e-9);
    assert_eq!(plan.required_units["Outlander"], 103);
}

#[test]
fn insensitive_profit_is_unsatisfiable() {
    let zeroed: BTreeMap<String, f64> =
        contributions().into_keys().map(|name| (name, 0.0)).collect();

    match solve_for_target(55_000.0, &baseline(), &zeroed, 0) {
        Err(PlannerError::UnsatisfiableTarget(_)) => {}
        other => panic!("expected UnsatisfiableTarget, got {:?}", other),
    }

    // The baseline profit itself is still reachable
    let plan = solve_for_target(50_000.0, &baseline(), &zeroed, 0).unwrap();
    assert_approx_eq!(plan.scale, 1.0);
    assert_approx_eq!(plan.projected_profit, 50_000.0);
}

#[test]
fn far_below_baseline_targets_clamp_at_zero() {
    let plan = solve_for_target(-200_000.0, &baseline(), &contributions(), 0).unwrap();

    assert!(plan.scale < 0.0);
    assert!(plan.clamped);
    for &units in plan.required_units.values() {
        assert_eq!(units, 0);
    }
    // Best-effort profit with zero sales, not the requested target
    assert_approx_eq!(plan.projected_profit, 50_000.0 - 161_000.0);
}

#[test]
fn period_outside_horizon_is_rejected() {
    match solve_for_target(55_000.0, &baseline(), &contributions(), 3) {
        Err(PlannerError::ValidationError(_)) => {}
        other => panic!("expected ValidationError, got {:?}", other),
    }
}
