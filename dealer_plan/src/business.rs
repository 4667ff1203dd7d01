//! Business assumptions behind the per-unit contribution table
//!
//! Each tracked vehicle model carries a per-unit revenue and cost of sale;
//! together with the sales commission rate they determine the net financial
//! contribution of one additional unit sold. The table is static for the
//! app session.

use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Per-unit financials for one vehicle model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleEconomics {
    pub revenue_per_unit: f64,
    pub cost_per_unit: f64,
}

impl VehicleEconomics {
    /// Net financial impact of one additional unit at the given commission rate
    pub fn contribution(&self, commission_rate: f64) -> f64 {
        self.revenue_per_unit - self.cost_per_unit - self.revenue_per_unit * commission_rate
    }
}

/// Static table of vehicle economics for the tracked operational KPIs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEconomics {
    vehicles: BTreeMap<String, VehicleEconomics>,
    commission_rate: f64,
}

impl UnitEconomics {
    /// Create a validated economics table
    pub fn new(
        vehicles: BTreeMap<String, VehicleEconomics>,
        commission_rate: f64,
    ) -> Result<Self> {
        if vehicles.is_empty() {
            return Err(PlannerError::ValidationError(
                "At least one vehicle model is required".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&commission_rate) {
            return Err(PlannerError::ValidationError(format!(
                "Commission rate must be in [0, 1), got {}",
                commission_rate
            )));
        }
        for (name, vehicle) in &vehicles {
            if vehicle.revenue_per_unit < 0.0 || vehicle.cost_per_unit < 0.0 {
                return Err(PlannerError::ValidationError(format!(
                    "Negative per-unit figures for vehicle '{}'",
                    name
                )));
            }
        }

        Ok(Self {
            vehicles,
            commission_rate,
        })
    }

    /// Load and validate an economics table from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let raw: UnitEconomics = serde_json::from_reader(BufReader::new(file))?;
        Self::new(raw.vehicles, raw.commission_rate)
    }

    /// Net contribution per unit for one vehicle
    pub fn contribution(&self, vehicle: &str) -> Result<f64> {
        self.vehicles
            .get(vehicle)
            .map(|v| v.contribution(self.commission_rate))
            .ok_or_else(|| PlannerError::UnknownKpi(vehicle.to_string()))
    }

    /// Net contribution per unit for every tracked vehicle
    pub fn contributions(&self) -> BTreeMap<String, f64> {
        self.vehicles
            .iter()
            .map(|(name, v)| (name.clone(), v.contribution(self.commission_rate)))
            .collect()
    }

    /// Get the sales commission rate
    pub fn commission_rate(&self) -> f64 {
        self.commission_rate
    }

    /// Iterate over the tracked vehicle model names
    pub fn vehicle_names(&self) -> impl Iterator<Item = &str> {
        self.vehicles.keys().map(String::as_str)
    }

    /// Whether a vehicle model is tracked
    pub fn contains(&self, vehicle: &str) -> bool {
        self.vehicles.contains_key(vehicle)
    }

    /// Number of tracked vehicle models
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl Default for UnitEconomics {
    /// The dealership's four tracked models with a 5% sales commission
    fn default() -> Self {
        let mut vehicles = BTreeMap::new();
        vehicles.insert(
            "Outlander".to_string(),
            VehicleEconomics {
                revenue_per_unit: 30_000.0,
                cost_per_unit: 25_000.0,
            },
        );
        vehicles.insert(
            "RVR".to_string(),
            VehicleEconomics {
                revenue_per_unit: 24_000.0,
                cost_per_unit: 20_000.0,
            },
        );
        vehicles.insert(
            "Eclipse Cross".to_string(),
            VehicleEconomics {
                revenue_per_unit: 28_000.0,
                cost_per_unit: 24_000.0,
            },
        );
        vehicles.insert(
            "Mirage".to_string(),
            VehicleEconomics {
                revenue_per_unit: 18_000.0,
                cost_per_unit: 15_000.0,
            },
        );

        Self {
            vehicles,
            commission_rate: 0.05,
        }
    }
}
