use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Landing outcome of a launch: `1` = success, `0` = failure.
pub type OutcomeClass = u8;

pub const OUTCOME_FAILURE: OutcomeClass = 0;
pub const OUTCOME_SUCCESS: OutcomeClass = 1;

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number")]
    pub flight_number: u32,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "class")]
    pub class: OutcomeClass,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Detailed booster label (e.g. `F9 v1.0  B0003`). Not every export carries it.
    #[serde(rename = "Booster Version", default)]
    pub booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.class == OUTCOME_SUCCESS
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed payload bounds.
///
/// Built once at startup and shared read-only afterwards; there is no way to
/// mutate the records through this type.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct launch sites in order of first appearance.
    sites: Vec<String>,
    min_payload: f64,
    max_payload: f64,
}

/// Returned by [`LaunchDataset::from_records`] for a table with no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("dataset contains no launch records")]
pub struct EmptyDataset;

impl LaunchDataset {
    /// Build the dataset and its summary statistics from loaded rows.
    ///
    /// An empty table has no payload bounds and is rejected.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, EmptyDataset> {
        if records.is_empty() {
            return Err(EmptyDataset);
        }

        let mut sites: Vec<String> = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for rec in &records {
            if !sites.iter().any(|s| s == &rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
            min_payload = min_payload.min(rec.payload_mass_kg);
            max_payload = max_payload.max(rec.payload_mass_kg);
        }

        Ok(LaunchDataset {
            records,
            sites,
            min_payload,
            max_payload,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch site names, first-appearance order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Smallest payload mass in the dataset (kg).
    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    /// Largest payload mass in the dataset (kg).
    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
