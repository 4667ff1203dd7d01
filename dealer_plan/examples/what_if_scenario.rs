use chrono::NaiveDate;
use dealer_plan::data::{KpiTable, MonthlySeries};
use dealer_plan::planner::tracked_kpis;
use dealer_plan::{ModelBank, Planner, PlannerConfig, Scenario, UnitEconomics};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Dealer Plan: What-If Scenario Example");
    println!("=====================================\n");

    let table = create_sample_table();
    let config = PlannerConfig::default();
    let economics = UnitEconomics::default();
    let bank = ModelBank::train(&table, &tracked_kpis(&config, &economics))?;
    let planner = Planner::new(bank, economics, config)?;

    let baseline = planner.baseline(3)?;
    println!("Baseline profit per month:");
    for row in &baseline.rows {
        println!("  {}: {:.0}", row.period.format("%B %Y"), row.profit);
    }

    // Push Outlander and Mirage sales above their forecasts
    let mut overrides = Scenario::new();
    overrides.insert("Outlander".to_string(), 120);
    overrides.insert("Mirage".to_string(), 35);

    println!("\nScenario: sell 120 Outlanders and 35 Mirages a month");
    for (vehicle, &units) in &overrides {
        let contribution = planner.economics().contribution(vehicle)?;
        println!("  {} -> {} units at {:.0} net per unit", vehicle, units, contribution);
    }

    let plan = planner.apply_scenario(&overrides)?;
    println!("\nAdjusted plan:");
    for (row, base) in plan.rows.iter().zip(&baseline.rows) {
        println!(
            "  {}: profit {:.0} (baseline {:.0}, change {:+.0})",
            row.period.format("%B %Y"),
            row.profit,
            base.profit,
            row.profit - base.profit
        );
    }

    Ok(())
}

/// Three years of monthly history with steady unit sales
fn create_sample_table() -> KpiTable {
    let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    let mut table = KpiTable::new();

    table.insert(MonthlySeries::from_values(
        "Currency:Revenue/Sales",
        start,
        (0..36).map(|t| 470_000.0 + 800.0 * t as f64).collect(),
    ));
    table.insert(MonthlySeries::from_values(
        "Currency:Expense",
        start,
        vec![300_000.0; 36],
    ));
    table.insert(MonthlySeries::from_values(
        "Currency:Payroll/Compensation",
        start,
        vec![150_000.0; 36],
    ));

    for (vehicle, level) in [
        ("Outlander", 100.0),
        ("RVR", 50.0),
        ("Eclipse Cross", 30.0),
        ("Mirage", 20.0),
    ] {
        table.insert(MonthlySeries::from_values(vehicle, start, vec![level; 36]));
    }

    table
}
