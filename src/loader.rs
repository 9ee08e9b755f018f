//! CSV loading: timestamp parsing, derived columns, filter application.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::{debug, info};

use crate::dataset::{City, Dataset, Demographics, Filters, Trip};

const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A row as it appears in the source CSVs. The files open with an unnamed
/// index column (ignored here); Washington's lack the last two columns
/// entirely, and the other cities leave them blank for some riders.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    duration_secs: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: String,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    // Stored as a float ("1989.0") in the source files.
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

impl RawTrip {
    fn into_trip(self, city: City) -> Result<Trip> {
        let start_time = NaiveDateTime::parse_from_str(&self.start_time, START_TIME_FORMAT)
            .with_context(|| format!("unparseable start time {:?}", self.start_time))?;
        let end_time = NaiveDateTime::parse_from_str(&self.end_time, START_TIME_FORMAT)
            .with_context(|| format!("unparseable end time {:?}", self.end_time))?;

        let demographics = if city.has_demographics() {
            Demographics::Recorded {
                gender: self.gender.filter(|g| !g.is_empty()),
                birth_year: self.birth_year.map(|y| y as i32),
            }
        } else {
            Demographics::NotApplicable
        };

        Ok(Trip::new(
            start_time,
            end_time,
            self.start_station,
            self.end_station,
            self.duration_secs,
            self.user_type,
            demographics,
        ))
    }
}

/// Loads the chosen city's CSV from `data_dir`, derives the month, weekday,
/// and hour columns from each start time, and keeps only the rows matching
/// the month/day filters, preserving file order.
///
/// # Errors
///
/// A missing file, malformed row, or unparseable timestamp is fatal and
/// propagates with the file path attached; the dataset is assumed
/// pre-provisioned, so there is no retry.
pub fn load_data(data_dir: &Path, filters: &Filters) -> Result<Dataset> {
    let path = data_dir.join(filters.city.data_file());
    info!(path = %path.display(), city = filters.city.name(), "Loading trip data");

    let mut reader = csv::Reader::from_path(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut trips = Vec::new();
    let mut total_rows = 0usize;
    for (row, record) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = record
            .with_context(|| format!("malformed record in {}", path.display()))?;
        let trip = raw
            .into_trip(filters.city)
            .with_context(|| format!("row {} of {}", row + 1, path.display()))?;

        total_rows += 1;
        if filters.matches(&trip) {
            trips.push(trip);
        }
    }

    debug!(total_rows, kept = trips.len(), "Filters applied");
    Ok(Dataset {
        city: filters.city,
        trips,
    })
}
