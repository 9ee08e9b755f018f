//! Most popular start station, end station, and station combination.

use std::fmt;

use serde::Serialize;

use crate::dataset::Dataset;
use crate::stats::utility::mode;

#[derive(Debug, Serialize)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// "start, end" of the most frequent trip.
    pub combination: String,
}

impl StationStats {
    /// Returns `None` for an empty dataset, where no mode exists.
    pub fn compute(dataset: &Dataset) -> Option<StationStats> {
        let start_station = mode(dataset.trips.iter().map(|t| t.start_station.as_str()))?;
        let end_station = mode(dataset.trips.iter().map(|t| t.end_station.as_str()))?;
        let combination = mode(
            dataset
                .trips
                .iter()
                .map(|t| format!("{}, {}", t.start_station, t.end_station)),
        )?;

        Some(StationStats {
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            combination,
        })
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most popular start station: {}", self.start_station)?;
        writeln!(f, "Most popular end station: {}", self.end_station)?;
        writeln!(f, "Most popular station combination: {}", self.combination)
    }
}
