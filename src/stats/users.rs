//! User demographics: type counts, gender counts, and birth-year extremes.

use std::fmt;

use serde::Serialize;

use crate::dataset::{Dataset, Demographics, NOT_APPLICABLE};
use crate::stats::utility::{mode, value_counts};

#[derive(Debug, Serialize)]
pub struct UserStats {
    /// Count per distinct user type, descending by count.
    pub user_types: Vec<(String, usize)>,
    pub demographics: DemographicStats,
}

/// Gender and birth-year aggregates, or the sentinel for cities whose
/// source data has neither column.
#[derive(Debug, Serialize)]
pub enum DemographicStats {
    Recorded {
        /// Count per recorded gender, descending; blank cells excluded.
        genders: Vec<(String, usize)>,
        earliest_birth_year: Option<i32>,
        latest_birth_year: Option<i32>,
        common_birth_year: Option<i32>,
    },
    NotApplicable,
}

impl UserStats {
    /// Returns `None` for an empty dataset, where no breakdown exists.
    pub fn compute(dataset: &Dataset) -> Option<UserStats> {
        if dataset.is_empty() {
            return None;
        }

        let user_types = value_counts(dataset.trips.iter().map(|t| t.user_type.clone()));

        let demographics = if dataset.city.has_demographics() {
            let genders = value_counts(dataset.trips.iter().filter_map(|t| {
                match &t.demographics {
                    Demographics::Recorded { gender, .. } => gender.clone(),
                    Demographics::NotApplicable => None,
                }
            }));
            let years: Vec<i32> = dataset
                .trips
                .iter()
                .filter_map(|t| match &t.demographics {
                    Demographics::Recorded { birth_year, .. } => *birth_year,
                    Demographics::NotApplicable => None,
                })
                .collect();

            DemographicStats::Recorded {
                genders,
                earliest_birth_year: years.iter().copied().min(),
                latest_birth_year: years.iter().copied().max(),
                common_birth_year: mode(years.into_iter()),
            }
        } else {
            DemographicStats::NotApplicable
        };

        Some(UserStats {
            user_types,
            demographics,
        })
    }
}

fn fmt_year(year: Option<i32>) -> String {
    year.map_or_else(|| NOT_APPLICABLE.to_string(), |y| y.to_string())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User count:")?;
        for (user_type, count) in &self.user_types {
            writeln!(f, "{user_type:<25} {count}")?;
        }
        writeln!(f)?;

        match &self.demographics {
            DemographicStats::Recorded {
                genders,
                earliest_birth_year,
                latest_birth_year,
                common_birth_year,
            } => {
                writeln!(f, "Gender:")?;
                for (gender, count) in genders {
                    writeln!(f, "{gender:<25} {count}")?;
                }
                writeln!(f)?;
                writeln!(f, "Earliest birth year: {}", fmt_year(*earliest_birth_year))?;
                writeln!(f, "Most recent birth year: {}", fmt_year(*latest_birth_year))?;
                writeln!(f, "Most common birth year: {}", fmt_year(*common_birth_year))
            }
            DemographicStats::NotApplicable => {
                writeln!(f, "Gender: {NOT_APPLICABLE}")?;
                writeln!(f)?;
                writeln!(f, "Earliest birth year: {NOT_APPLICABLE}")?;
                writeln!(f, "Most recent birth year: {NOT_APPLICABLE}")?;
                writeln!(f, "Most common birth year: {NOT_APPLICABLE}")
            }
        }
    }
}
