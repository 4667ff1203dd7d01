use chrono::NaiveDate;
use dealer_plan::data::{KpiTable, MonthlySeries};
use dealer_plan::planner::tracked_kpis;
use dealer_plan::{ModelBank, Planner, PlannerConfig, UnitEconomics};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Dealer Plan: Target-Based Planning Example");
    println!("==========================================\n");

    let table = create_sample_table();
    let config = PlannerConfig::default();
    let economics = UnitEconomics::default();
    let bank = ModelBank::train(&table, &tracked_kpis(&config, &economics))?;
    let planner = Planner::new(bank, economics, config)?;

    let baseline = planner.baseline(3)?;
    let period = 0;
    let baseline_profit = baseline.rows[period].profit;
    let target_profit = baseline_profit + 50_000.0;

    println!(
        "Planning month: {}",
        baseline.rows[period].period.format("%B %Y")
    );
    println!("Baseline profit: {:.0}", baseline_profit);
    println!("Target profit:   {:.0}\n", target_profit);

    let plan = planner.solve_for_target(target_profit, period)?;

    println!("Action plan (scale every model by {:.3}):", plan.scale);
    for (vehicle, &required) in &plan.required_units {
        let current = baseline.rows[period].units[vehicle];
        println!(
            "  Sell {} '{}' units ({:+.0} over the forecast)",
            required,
            vehicle,
            required as f64 - current
        );
    }

    println!("\nProjected profit: {:.0}", plan.projected_profit);
    if plan.meets_target() {
        println!("The rounded plan reaches the target.");
    } else {
        println!(
            "Best effort: {:.0} short of the target.",
            plan.target_profit - plan.projected_profit
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
        (0..36).map(|t| 460_000.0 + 1_000.0 * t as f64).collect(),
    ));
    table.insert(MonthlySeries::from_values(
        "Currency:Expense",
        start,
        vec![295_000.0; 36],
    ));
    table.insert(MonthlySeries::from_values(
        "Currency:Payroll/Compensation",
        start,
        vec![148_000.0; 36],
    ));

    for (vehicle, level) in [
        ("Outlander", 90.0),
        ("RVR", 55.0),
        ("Eclipse Cross", 25.0),
        ("Mirage", 15.0),
    ] {
        table.insert(MonthlySeries::from_values(vehicle, start, vec![level; 36]));
    }

    table
}
