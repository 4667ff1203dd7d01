//! Pre-trained model storage, loaded once at startup and read-only after
//!
//! The bank is the boundary between the offline training step and the
//! interactive app: training builds it from a cleaned KPI table and saves
//! it as JSON; the app loads it once and only ever reads from it.

use crate::data::KpiTable;
use crate::error::{PlannerError, Result};
use crate::models::FittedModel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Mapping from KPI name to its fitted model, plus the shared forecast origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBank {
    models: BTreeMap<String, FittedModel>,
    /// First month after the training data; forecasts start here
    origin: NaiveDate,
}

impl ModelBank {
    /// Train one model per tracked KPI from a cleaned table
    ///
    /// All tracked series must end on the same month so their forecasts
    /// share one horizon.
    pub fn train<S: AsRef<str>>(table: &KpiTable, kpis: &[S]) -> Result<Self> {
        let mut models = BTreeMap::new();
        let mut origin: Option<NaiveDate> = None;

        for name in kpis {
            let name = name.as_ref();
            let series = table
                .get(name)
                .ok_or_else(|| PlannerError::UnknownKpi(name.to_string()))?;

            match origin {
                None => origin = Some(series.next_period()),
                Some(expected) if expected != series.next_period() => {
                    return Err(PlannerError::ValidationError(format!(
                        "Series '{}' ends before {}, out of step with the rest of the bank",
                        name, expected
                    )));
                }
                Some(_) => {}
            }

            let model = FittedModel::train(series.values())?;
            debug!(
                kpi = name,
                observations = series.len(),
                seasonal = model.is_seasonal(),
                "trained bank entry"
            );
            models.insert(name.to_string(), model);
        }

        let origin = origin.ok_or_else(|| {
            PlannerError::ValidationError("Cannot train a bank with no KPIs".to_string())
        })?;

        Ok(Self { models, origin })
    }

    /// Load a previously trained bank from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let bank: ModelBank = serde_json::from_reader(BufReader::new(file))?;
        debug!(entries = bank.models.len(), origin = %bank.origin, "loaded model bank");
        Ok(bank)
    }

    /// Save the bank to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Look up the fitted model for a KPI
    pub fn get(&self, name: &str) -> Result<&FittedModel> {
        self.models
            .get(name)
            .ok_or_else(|| PlannerError::UnknownKpi(name.to_string()))
    }

    /// Whether a model exists for the given KPI
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// First forecast month
    pub fn origin(&self) -> NaiveDate {
        self.origin
    }

    /// Iterate over the tracked KPI names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Number of trained models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the bank holds no models
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
