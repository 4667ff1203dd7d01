//! Monthly KPI series handling for the planner core
//!
//! The core consumes a cleaned three-column table (KPI name, period, value)
//! produced by an external preparation step. Series are keyed by KPI name
//! and hold one value per calendar month with no gaps or duplicates.

use crate::error::{PlannerError, Result};
use chrono::{Datelike, Months, NaiveDate};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Advance a month label by a number of calendar months.
pub(crate) fn add_months(period: NaiveDate, months: u32) -> NaiveDate {
    // Month labels are always the first of the month, far from the
    // representable range, so the checked arithmetic cannot fail here.
    period
        .checked_add_months(Months::new(months))
        .expect("month arithmetic within range")
}

/// Normalize any date within a month to that month's label (the first)
fn month_label(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("valid month label")
}

/// One KPI's chronologically ordered monthly observations
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    name: String,
    start: NaiveDate,
    values: Vec<f64>,
}

impl MonthlySeries {
    /// Create an empty series starting at the month containing `start`
    pub fn new(name: impl Into<String>, start: NaiveDate) -> Self {
        Self {
            name: name.into(),
            start: month_label(start),
            values: Vec::new(),
        }
    }

    /// Create a series from consecutive monthly values
    pub fn from_values(name: impl Into<String>, start: NaiveDate, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            start: month_label(start),
            values,
        }
    }

    /// Append an observation, enforcing one-month contiguity
    pub fn push(&mut self, period: NaiveDate, value: f64) -> Result<()> {
        let period = month_label(period);
        let expected = self.next_period();
        if period == expected {
            self.values.push(value);
            Ok(())
        } else if period < expected {
            Err(PlannerError::DataError(format!(
                "Duplicate or out-of-order period {} for KPI '{}'",
                period, self.name
            )))
        } else {
            Err(PlannerError::DataError(format!(
                "Gap in series '{}': expected {}, got {}",
                self.name, expected, period
            )))
        }
    }

    /// Get the KPI name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the first observed month
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// First month not covered by observations
    pub fn next_period(&self) -> NaiveDate {
        add_months(self.start, self.values.len() as u32)
    }

    /// Get the observed values in chronological order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observed months
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Flat table of monthly KPI series, read-only to the rest of the system
#[derive(Debug, Clone, Default)]
pub struct KpiTable {
    series: BTreeMap<String, MonthlySeries>,
}

impl KpiTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a series, replacing any previous one with the same name
    pub fn insert(&mut self, series: MonthlySeries) {
        self.series.insert(series.name().to_string(), series);
    }

    /// Look up a series by KPI name
    pub fn get(&self, name: &str) -> Option<&MonthlySeries> {
        self.series.get(name)
    }

    /// Iterate over the KPI names in the table
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Number of series in the table
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the table holds no series
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Raw row shape of the cleaned KPI table
#[derive(Debug, Deserialize)]
struct KpiRow {
    kpi: String,
    period: String,
    value: f64,
}

/// Loader for cleaned KPI tables
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a KPI table from a CSV file with columns `kpi,period,value`
    ///
    /// Periods are accepted as `YYYY-MM` or `YYYY-MM-DD` and normalized to
    /// the first of the month.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<KpiTable> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut table = KpiTable::new();

        for row in reader.deserialize() {
            let row: KpiRow = row?;
            let period = parse_period(&row.period)?;
            match table.series.get_mut(&row.kpi) {
                Some(series) => series.push(period, row.value)?,
                None => {
                    let mut series = MonthlySeries::new(row.kpi.clone(), period);
                    series.push(period, row.value)?;
                    table.insert(series);
                }
            }
        }

        Ok(table)
    }
}

fn parse_period(raw: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(month_label(date));
    }
    // A bare year-month needs a day before it parses as a date
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
        .map(month_label)
        .map_err(|_| PlannerError::DataError(format!("Unparseable period '{raw}'")))
}
