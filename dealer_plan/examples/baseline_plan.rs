use chrono::NaiveDate;
use dealer_plan::data::{KpiTable, MonthlySeries};
use dealer_plan::planner::tracked_kpis;
use dealer_plan::{ModelBank, Planner, PlannerConfig, UnitEconomics};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Dealer Plan: Baseline Forecast Example");
    println!("======================================\n");

    // Build three years of sample history and train the bank
    println!("Training models on sample history...");
    let table = create_sample_table();
    let config = PlannerConfig::default();
    let economics = UnitEconomics::default();
    let bank = ModelBank::train(&table, &tracked_kpis(&config, &economics))?;
    println!("Trained {} models, forecasting from {}\n", bank.len(), bank.origin());

    // Baseline 3-month forecast
    let planner = Planner::new(bank, economics, config)?;
    let baseline = planner.baseline(3)?;

    println!("Baseline 3-month forecast:");
    println!(
        "{:<12} {:>12} {:>12} {:>12} {:>12}",
        "Month", "Revenue", "Expense", "Payroll", "Profit"
    );
    for row in &baseline.rows {
        println!(
            "{:<12} {:>12.0} {:>12.0} {:>12.0} {:>12.0}",
            row.period.format("%B %Y").to_string(),
            row.revenue,
            row.expense,
            row.payroll,
            row.profit
        );
    }

    println!("\nForecast unit sales:");
    for row in &baseline.rows {
        let units: Vec<String> = row
            .units
            .iter()
            .map(|(name, count)| format!("{}: {:.0}", name, count))
            .collect();
        println!("  {}: {}", row.period.format("%B %Y"), units.join(", "));
    }

    Ok(())
}

/// Three years of monthly history with a seasonal revenue swing
fn create_sample_table() -> KpiTable {
    let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    let mut table = KpiTable::new();

    let revenue: Vec<f64> = (0..36)
        .map(|t| 480_000.0 + 25_000.0 * ((t % 12) as f64 - 5.5) / 5.5)
        .collect();
    table.insert(MonthlySeries::from_values(
        "Currency:Revenue/Sales",
        start,
        revenue,
    ));
    table.insert(MonthlySeries::from_values(
        "Currency:Expense",
        start,
        (0..36).map(|t| 290_000.0 + 500.0 * (t % 12) as f64).collect(),
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
        let units: Vec<f64> = (0..36).map(|t| level + (t % 6) as f64).collect();
        table.insert(MonthlySeries::from_values(vehicle, start, units));
    }

    table
}
