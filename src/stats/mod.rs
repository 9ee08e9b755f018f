//! The four report passes over a filtered dataset.
//!
//! Each pass prints its section to the console, logs the computed report
//! as JSON, and reports its own wall-clock duration. An empty dataset
//! short-circuits to a "no data" line instead of computing aggregates.

pub mod duration;
pub mod stations;
pub mod time_of_day;
pub mod users;
pub mod utility;

use std::fmt::Display;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::dataset::Dataset;
use crate::output;

pub use duration::DurationStats;
pub use stations::StationStats;
pub use time_of_day::TravelTimeStats;
pub use users::UserStats;

/// Runs the four report passes in their fixed display order.
pub fn run_all(dataset: &Dataset) {
    run_report(
        "The Most Frequent Times of Travel",
        dataset,
        TravelTimeStats::compute,
    );
    run_report(
        "The Most Popular Stations and Trip",
        dataset,
        StationStats::compute,
    );
    run_report("Trip Duration", dataset, DurationStats::compute);
    run_report("User Stats", dataset, UserStats::compute);
}

fn run_report<S: Serialize + Display>(
    title: &str,
    dataset: &Dataset,
    compute: impl Fn(&Dataset) -> Option<S>,
) {
    println!("\nCalculating {title}...\n");
    let started = Instant::now();

    match compute(dataset) {
        Some(stats) => {
            print!("{stats}");
            output::log_json(&stats);
        }
        None => println!("No data for this selection."),
    }

    let elapsed = started.elapsed().as_secs_f64();
    debug!(title, elapsed, "Report pass finished");
    println!("\nThis took {elapsed} seconds.");
    output::line_break();
}
