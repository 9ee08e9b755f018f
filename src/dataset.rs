//! Core data model: cities, filter selections, and trip records.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

/// Month names accepted by the month prompt.
/// "all" is first because months are 1-indexed.
pub const MONTHS: [&str; 7] = [
    "all", "january", "february", "march", "april", "may", "june",
];

/// Day names accepted by the day prompt.
/// "all" is last because days are 0-indexed (Monday = 0).
pub const DAYS: [&str; 8] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    "all",
];

/// Sentinel shown wherever Washington's missing demographic data would be.
pub const NOT_APPLICABLE: &str = "N/A";

/// Display name for a 1-indexed month, in prompt (lower-case) form.
pub fn month_name(month: u32) -> &'static str {
    MONTHS.get(month as usize).copied().unwrap_or("unknown")
}

/// Display name for a 0-indexed weekday (Monday = 0), in prompt form.
pub fn day_name(weekday: u32) -> &'static str {
    DAYS.get(weekday as usize).copied().unwrap_or("unknown")
}

/// The three cities with pre-provisioned trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// The name the city prompt accepts.
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of the city's trip data, relative to the data directory.
    pub fn data_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Washington's source files carry no gender or birth-year columns.
    pub fn has_demographics(&self) -> bool {
        !matches!(self, City::Washington)
    }

    pub fn from_name(name: &str) -> Option<City> {
        City::ALL.iter().copied().find(|c| c.name() == name)
    }
}

/// Month half of a filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// 1-indexed, restricted to January-June by the source files.
    Month(u32),
}

impl MonthFilter {
    /// Maps a validated month prompt answer to a filter.
    pub fn from_name(name: &str) -> Option<MonthFilter> {
        if name == "all" {
            return Some(MonthFilter::All);
        }
        MONTHS
            .iter()
            .position(|m| *m == name)
            .map(|i| MonthFilter::Month(i as u32))
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => *m == month,
        }
    }
}

/// Day-of-week half of a filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    /// 0-indexed, Monday = 0.
    Day(u32),
}

impl DayFilter {
    /// Maps a validated day prompt answer to a filter.
    pub fn from_name(name: &str) -> Option<DayFilter> {
        if name == "all" {
            return Some(DayFilter::All);
        }
        DAYS.iter()
            .position(|d| *d == name)
            .map(|i| DayFilter::Day(i as u32))
    }

    pub fn matches(&self, weekday: u32) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == weekday,
        }
    }
}

/// One session iteration's city/month/day selection.
#[derive(Debug, Clone, Copy)]
pub struct Filters {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Filters {
    pub fn matches(&self, trip: &Trip) -> bool {
        self.month.matches(trip.month) && self.day.matches(trip.weekday)
    }
}

/// Rider demographics. Chicago and New York City record them (with blank
/// cells for some riders); Washington's files have neither column, so its
/// rows take the `NotApplicable` variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Demographics {
    Recorded {
        gender: Option<String>,
        birth_year: Option<i32>,
    },
    NotApplicable,
}

/// A single trip record with its derived time columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub duration_secs: f64,
    pub user_type: String,
    pub demographics: Demographics,

    // Derived from start_time at construction, immutable thereafter.
    pub month: u32,
    pub weekday: u32,
    pub hour: u32,
}

impl Trip {
    /// Builds a trip, deriving the month, weekday, and hour columns from
    /// the start timestamp.
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        start_station: String,
        end_station: String,
        duration_secs: f64,
        user_type: String,
        demographics: Demographics,
    ) -> Trip {
        Trip {
            month: start_time.month(),
            weekday: start_time.weekday().num_days_from_monday(),
            hour: start_time.hour(),
            start_time,
            end_time,
            start_station,
            end_station,
            duration_secs,
            user_type,
            demographics,
        }
    }
}

impl std::fmt::Display for Trip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} | {:>6}s | {} -> {} | {}",
            self.start_time,
            self.end_time,
            self.duration_secs,
            self.start_station,
            self.end_station,
            self.user_type,
        )?;
        match &self.demographics {
            Demographics::Recorded { gender, birth_year } => write!(
                f,
                " | {} | {}",
                gender.as_deref().unwrap_or("-"),
                birth_year.map_or_else(|| "-".to_string(), |y| y.to_string()),
            ),
            Demographics::NotApplicable => {
                write!(f, " | {NOT_APPLICABLE} | {NOT_APPLICABLE}")
            }
        }
    }
}

/// The filtered trips for one city, in file order. Rebuilt from scratch
/// each session iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub city: City,
    pub trips: Vec<Trip>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::testutil::trip;
    use super::*;

    #[test]
    fn test_month_filter_from_name() {
        assert_eq!(MonthFilter::from_name("all"), Some(MonthFilter::All));
        assert_eq!(MonthFilter::from_name("january"), Some(MonthFilter::Month(1)));
        assert_eq!(MonthFilter::from_name("june"), Some(MonthFilter::Month(6)));
        assert_eq!(MonthFilter::from_name("july"), None);
    }

    #[test]
    fn test_day_filter_from_name() {
        assert_eq!(DayFilter::from_name("monday"), Some(DayFilter::Day(0)));
        assert_eq!(DayFilter::from_name("sunday"), Some(DayFilter::Day(6)));
        assert_eq!(DayFilter::from_name("all"), Some(DayFilter::All));
        assert_eq!(DayFilter::from_name("someday"), None);
    }

    #[test]
    fn test_city_from_name() {
        assert_eq!(City::from_name("chicago"), Some(City::Chicago));
        assert_eq!(City::from_name("new york city"), Some(City::NewYorkCity));
        assert_eq!(City::from_name("washington"), Some(City::Washington));
        assert_eq!(City::from_name("boston"), None);
    }

    #[test]
    fn test_only_washington_lacks_demographics() {
        assert!(City::Chicago.has_demographics());
        assert!(City::NewYorkCity.has_demographics());
        assert!(!City::Washington.has_demographics());
    }

    #[test]
    fn test_derived_columns() {
        // 2017-06-05 was a Monday.
        let t = trip("2017-06-05 08:15:00", "A", "B", 60.0);
        assert_eq!(t.month, 6);
        assert_eq!(t.weekday, 0);
        assert_eq!(t.hour, 8);
    }

    #[test]
    fn test_filters_match_invariant() {
        let filters = Filters {
            city: City::Chicago,
            month: MonthFilter::Month(6),
            day: DayFilter::Day(0),
        };
        assert!(filters.matches(&trip("2017-06-05 08:15:00", "A", "B", 60.0)));
        // Right month, wrong day (a Tuesday).
        assert!(!filters.matches(&trip("2017-06-06 08:15:00", "A", "B", 60.0)));
        // Right day, wrong month (a Monday in May).
        assert!(!filters.matches(&trip("2017-05-01 08:15:00", "A", "B", 60.0)));
    }

    #[test]
    fn test_all_filters_match_everything() {
        let filters = Filters {
            city: City::Chicago,
            month: MonthFilter::All,
            day: DayFilter::All,
        };
        assert!(filters.matches(&trip("2017-01-01 00:00:00", "A", "B", 1.0)));
        assert!(filters.matches(&trip("2017-06-30 23:59:59", "A", "B", 1.0)));
    }

    #[test]
    fn test_month_and_day_names_round_trip() {
        assert_eq!(month_name(6), "june");
        assert_eq!(day_name(0), "monday");
        assert_eq!(day_name(6), "sunday");
        assert_eq!(month_name(12), "unknown");
    }
}
