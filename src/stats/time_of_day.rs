//! Most frequent travel times: month, day of week, and start hour.

use std::fmt;

use serde::Serialize;

use crate::dataset::{Dataset, day_name, month_name};
use crate::output::title_case;
use crate::stats::utility::mode;

/// Modal month (1-indexed), weekday (0 = Monday), and start hour.
#[derive(Debug, Serialize)]
pub struct TravelTimeStats {
    pub month: u32,
    pub weekday: u32,
    pub hour: u32,
}

impl TravelTimeStats {
    /// Returns `None` for an empty dataset, where no mode exists.
    pub fn compute(dataset: &Dataset) -> Option<TravelTimeStats> {
        Some(TravelTimeStats {
            month: mode(dataset.trips.iter().map(|t| t.month))?,
            weekday: mode(dataset.trips.iter().map(|t| t.weekday))?,
            hour: mode(dataset.trips.iter().map(|t| t.hour))?,
        })
    }
}

impl fmt::Display for TravelTimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Most popular month: {}",
            title_case(month_name(self.month))
        )?;
        writeln!(f, "Most popular day: {}", title_case(day_name(self.weekday)))?;
        writeln!(f, "Most popular hour: {}", self.hour)
    }
}
