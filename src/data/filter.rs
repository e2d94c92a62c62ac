use serde::{Deserialize, Serialize};

use super::model::{LaunchDataset, LaunchRecord};
use super::site::SiteSelection;
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Payload range predicate
// ---------------------------------------------------------------------------

/// Payload interval selected on the slider, in kilograms.
///
/// Membership is strict on both ends: a launch whose payload equals `low` or
/// `high` is *not* in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, DashboardError> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(DashboardError::InvalidRange { low, high });
        }
        Ok(PayloadRange { low, high })
    }

    /// The full data range `[min_payload, max_payload]` of a dataset.
    pub fn of_dataset(dataset: &LaunchDataset) -> Self {
        PayloadRange {
            low: dataset.min_payload(),
            high: dataset.max_payload(),
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_kg: f64) -> bool {
        self.low < payload_kg && payload_kg < self.high
    }
}

impl TryFrom<[f64; 2]> for PayloadRange {
    type Error = DashboardError;

    fn try_from([low, high]: [f64; 2]) -> Result<Self, Self::Error> {
        PayloadRange::new(low, high)
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

// ---------------------------------------------------------------------------
// Record filters
// ---------------------------------------------------------------------------

/// Records launched from the selected site (every record for `All`),
/// in dataset order.
pub fn records_for_site(dataset: &LaunchDataset, site: SiteSelection) -> Vec<&LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|rec| site.matches(&rec.launch_site))
        .collect()
}

/// Records of the selected site whose payload lies strictly inside `range`.
pub fn records_in_range(
    dataset: &LaunchDataset,
    site: SiteSelection,
    range: PayloadRange,
) -> Vec<&LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|rec| site.matches(&rec.launch_site) && range.contains(rec.payload_mass_kg))
        .collect()
}
