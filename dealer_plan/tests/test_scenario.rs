use assert_approx_eq::assert_approx_eq;
use chrono::NaiveDate;
use dealer_plan::planner::{PlanResult, PlanRow};
use dealer_plan::scenario::{apply_scenario, Scenario};
use dealer_plan::PlannerError;
use pretty_assertions::assert_eq;
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
fn empty_override_is_a_no_op() {
    let baseline = baseline();
    let plan = apply_scenario(&baseline, &Scenario::new(), &contributions()).unwrap();
    assert_eq!(plan, baseline);
}

#[test]
fn override_equal_to_the_forecast_changes_nothing() {
    let baseline = baseline();
    let mut overrides = Scenario::new();
    overrides.insert("Outlander".to_string(), 100);

    let plan = apply_scenario(&baseline, &overrides, &contributions()).unwrap();
    assert_eq!(plan, baseline);
}

#[test]
fn profit_moves_linearly_with_overrides() {
    let baseline = baseline();
    let mut overrides = Scenario::new();
    overrides.insert("Outlander".to_string(), 110);
    overrides.insert("Mirage".to_string(), 5);

    let plan = apply_scenario(&baseline, &overrides, &contributions()).unwrap();
    let expected_delta = (110.0 - 100.0) * 1000.0 + (5.0 - 20.0) * 500.0;

    for (row, base) in plan.rows.iter().zip(&baseline.rows) {
        assert_approx_eq!(row.revenue, base.revenue + expected_delta);
        assert_approx_eq!(row.profit, base.profit + expected_delta);
        assert_eq!(row.units["Outlander"], 110.0);
        assert_eq!(row.units["Mirage"], 5.0);
    }
}

#[test]
fn expense_and_payroll_pass_through_unchanged() {
    let baseline = baseline();
    let mut overrides = Scenario::new();
    overrides.insert("RVR".to_string(), 80);

    let plan = apply_scenario(&baseline, &overrides, &contributions()).unwrap();
    for (row, base) in plan.rows.iter().zip(&baseline.rows) {
        assert_eq!(row.expense, base.expense);
        assert_eq!(row.payroll, base.payroll);
        assert_eq!(row.units["Outlander"], base.units["Outlander"]);
    }
}

#[test]
fn unknown_vehicle_is_rejected() {
    let mut overrides = Scenario::new();
    overrides.insert("Lancer".to_string(), 10);

    match apply_scenario(&baseline(), &overrides, &contributions()) {
        Err(PlannerError::UnknownKpi(name)) => assert_eq!(name, "Lancer"),
        other => panic!("expected UnknownKpi, got {:?}", other),
    }
}

#[test]
fn negative_override_is_rejected() {
    let mut overrides = Scenario::new();
    overrides.insert("Outlander".to_string(), -5);

    match apply_scenario(&baseline(), &overrides, &contributions()) {
        Err(PlannerError::InvalidOverride(_)) => {}
        other => panic!("expected InvalidOverride, got {:?}", other),
    }
}

#[test]
fn application_is_deterministic() {
    let baseline = baseline();
    let mut overrides = Scenario::new();
    overrides.insert("Eclipse Cross".to_string(), 45);

    let first = apply_scenario(&baseline, &overrides, &contributions()).unwrap();
    let second = apply_scenario(&baseline, &overrides, &contributions()).unwrap();
    assert_eq!(first, second);
}
