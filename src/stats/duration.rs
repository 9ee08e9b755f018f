//! Total and average trip duration.

use std::fmt;

use serde::Serialize;

use crate::dataset::Dataset;
use crate::stats::utility::mean;

#[derive(Debug, Serialize)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_secs: f64,
}

impl DurationStats {
    /// Returns `None` for an empty dataset rather than a meaningless mean.
    pub fn compute(dataset: &Dataset) -> Option<DurationStats> {
        if dataset.is_empty() {
            return None;
        }
        let durations: Vec<f64> = dataset.trips.iter().map(|t| t.duration_secs).collect();
        Some(DurationStats {
            total_secs: durations.iter().sum(),
            mean_secs: mean(&durations),
        })
    }
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total travel time: {} seconds", self.total_secs)?;
        writeln!(f, "Average travel time: {} seconds", self.mean_secs)
    }
}
