//! Planner entry points consumed by the presentation layer
//!
//! Each interactive request is stateless: the planner holds the read-only
//! model bank and business assumptions, and every call re-derives its plan
//! from scratch. Results are plain structured data for any UI to render.

use crate::bank::ModelBank;
use crate::business::UnitEconomics;
use crate::data::add_months;
use crate::error::{PlannerError, Result};
use crate::goal_seek::{self, TargetPlan};
use crate::scenario::{self, Scenario};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Names of the financial KPI models and the default planning horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub revenue_kpi: String,
    pub expense_kpi: String,
    pub payroll_kpi: String,
    pub horizon: usize,
}

impl PlannerConfig {
    /// Load a config from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            revenue_kpi: "Currency:Revenue/Sales".to_string(),
            expense_kpi: "Currency:Expense".to_string(),
            payroll_kpi: "Currency:Payroll/Compensation".to_string(),
            horizon: 3,
        }
    }
}

/// Every KPI name the planner needs a trained model for
pub fn tracked_kpis(config: &PlannerConfig, economics: &UnitEconomics) -> Vec<String> {
    let mut kpis = vec![
        config.revenue_kpi.clone(),
        config.expense_kpi.clone(),
        config.payroll_kpi.clone(),
    ];
    kpis.extend(economics.vehicle_names().map(str::to_string));
    kpis
}

/// One forecast month of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    pub period: NaiveDate,
    pub revenue: f64,
    pub expense: f64,
    pub payroll: f64,
    pub profit: f64,
    /// Forecast unit sales per vehicle, as whole non-negative counts
    pub units: BTreeMap<String, f64>,
}

/// A recomputed plan over the forecast horizon, one row per month
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanResult {
    pub rows: Vec<PlanRow>,
}

impl PlanResult {
    /// Row for a period index, failing if outside the horizon
    pub fn row(&self, period: usize) -> Result<&PlanRow> {
        self.rows.get(period).ok_or_else(|| {
            PlannerError::ValidationError(format!(
                "Period index {} outside the {}-month horizon",
                period,
                self.rows.len()
            ))
        })
    }

    /// Number of forecast months
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the plan holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The interactive planning facade over the bank and business assumptions
#[derive(Debug, Clone)]
pub struct Planner {
    bank: ModelBank,
    economics: UnitEconomics,
    config: PlannerConfig,
}

impl Planner {
    /// Build a planner, checking the bank covers every KPI the plan needs
    pub fn new(bank: ModelBank, economics: UnitEconomics, config: PlannerConfig) -> Result<Self> {
        for name in [&config.revenue_kpi, &config.expense_kpi, &config.payroll_kpi] {
            if !bank.contains(name) {
                return Err(PlannerError::UnknownKpi(name.clone()));
            }
        }
        for vehicle in economics.vehicle_names() {
            if !bank.contains(vehicle) {
                return Err(PlannerError::UnknownKpi(vehicle.to_string()));
            }
        }

        Ok(Self {
            bank,
            economics,
            config,
        })
    }

    /// Build a planner with the default config and vehicle economics
    pub fn with_defaults(bank: ModelBank) -> Result<Self> {
        Self::new(bank, UnitEconomics::default(), PlannerConfig::default())
    }

    /// Get the planner configuration
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Get the vehicle economics table
    pub fn economics(&self) -> &UnitEconomics {
        &self.economics
    }

    /// Get the model bank
    pub fn bank(&self) -> &ModelBank {
        &self.bank
    }

    /// Baseline forecast of all tracked KPIs over `horizon` months
    pub fn baseline(&self, horizon: usize) -> Result<PlanResult> {
        if horizon == 0 {
            return Err(PlannerError::InvalidHorizon(
                "Horizon must be a positive number of months".to_string(),
            ));
        }

        let revenue = self.bank.get(&self.config.revenue_kpi)?.forecast(horizon)?;
        let expense = self.bank.get(&self.config.expense_kpi)?.forecast(horizon)?;
        let payroll = self.bank.get(&self.config.payroll_kpi)?.forecast(horizon)?;

        let mut unit_forecasts: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for vehicle in self.economics.vehicle_names() {
            let forecast = self.bank.get(vehicle)?.forecast(horizon)?;
            unit_forecasts.insert(vehicle, forecast);
        }

        let rows = (0..horizon)
            .map(|i| {
                let units: BTreeMap<String, f64> = unit_forecasts
                    .iter()
                    .map(|(name, forecast)| (name.to_string(), whole_units(forecast[i])))
                    .collect();
                PlanRow {
                    period: add_months(self.bank.origin(), i as u32),
                    revenue: revenue[i],
                    expense: expense[i],
                    payroll: payroll[i],
                    profit: revenue[i] - (expense[i] + payroll[i]),
                    units,
                }
            })
            .collect();

        Ok(PlanResult { rows })
    }

    /// Baseline at the configured horizon with unit-sales overrides applied
    pub fn apply_scenario(&self, overrides: &Scenario) -> Result<PlanResult> {
        let baseline = self.baseline(self.config.horizon)?;
        scenario::apply_scenario(&baseline, overrides, &self.economics.contributions())
    }

    /// Unit sales required to hit a profit target in one forecast month
    pub fn solve_for_target(&self, target_profit: f64, period: usize) -> Result<TargetPlan> {
        let baseline = self.baseline(self.config.horizon)?;
        goal_seek::solve_for_target(
            target_profit,
            &baseline,
            &self.economics.contributions(),
            period,
        )
    }
}

/// Coerce a raw unit forecast to a whole, non-negative count
fn whole_units(value: f64) -> f64 {
    if value.is_finite() {
        value.round().max(0.0)
    } else {
        0.0
    }
}
