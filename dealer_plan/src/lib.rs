//! # Dealer Plan
//!
//! A Rust library for dealership KPI forecasting and interactive profit
//! planning.
//!
//! ## Features
//!
//! - Monthly KPI series handling (cleaned `kpi,period,value` tables)
//! - Exponential-smoothing forecasts with a seasonal/trend selection policy
//! - A pre-trained model bank, built offline and read-only after load
//! - What-if scenarios over vehicle unit sales
//! - Goal seek from a profit target back to required unit sales
//!
//! ## Quick Start
//!
//! ```no_run
//! use dealer_plan::planner::tracked_kpis;
//! use dealer_plan::{DataLoader, ModelBank, Planner, PlannerConfig, Scenario, UnitEconomics};
//!
//! fn main() -> Result<(), dealer_plan::PlannerError> {
//!     let config = PlannerConfig::default();
//!     let economics = UnitEconomics::default();
//!
//!     // Offline: train the bank from the cleaned KPI table and save it
//!     let table = DataLoader::from_csv("kpis.csv")?;
//!     let bank = ModelBank::train(&table, &tracked_kpis(&config, &economics))?;
//!     bank.save("trained_models.json")?;
//!
//!     // At startup: load once, then serve stateless requests
//!     let bank = ModelBank::load("trained_models.json")?;
//!     let planner = Planner::new(bank, economics, config)?;
//!
//!     // Baseline 3-month forecast
//!     let baseline = planner.baseline(3)?;
//!
//!     // What-if: sell 120 Outlanders a month instead of the forecast
//!     let mut overrides = Scenario::new();
//!     overrides.insert("Outlander".to_string(), 120);
//!     let plan = planner.apply_scenario(&overrides)?;
//!
//!     // Goal seek: what does next month need to make 50k more profit?
//!     let target = planner.solve_for_target(baseline.rows[0].profit + 50_000.0, 0)?;
//!     println!("{:?} -> {:?}", plan.rows[0].profit, target.required_units);
//!     Ok(())
//! }
//! ```

pub mod bank;
pub mod business;
pub mod data;
pub mod error;
pub mod goal_seek;
pub mod models;
pub mod planner;
pub mod scenario;

// Re-export commonly used types
pub use crate::bank::ModelBank;
pub use crate::business::{UnitEconomics, VehicleEconomics};
pub use crate::data::{DataLoader, KpiTable, MonthlySeries};
pub use crate::error::{PlannerError, Result};
pub use crate::goal_seek::TargetPlan;
pub use crate::models::FittedModel;
pub use crate::planner::{PlanResult, PlanRow, Planner, PlannerConfig};
pub use crate::scenario::Scenario;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
