//! Blocking read-validate-retry prompts for the interactive session.
//!
//! Everything here is generic over the reader/writer pair so tests can
//! script a whole session through an in-memory cursor.

use anyhow::{Context, Result, anyhow, bail};

use std::io::{BufRead, Write};

use crate::dataset::{City, DAYS, DayFilter, Filters, MONTHS, MonthFilter};
use crate::output::title_case;

/// Displays `prompt` and reads lines until one, trimmed and lower-cased,
/// is a member of `choices`; returns that member. Invalid answers
/// re-prompt with an "Invalid input." prefix, indefinitely.
///
/// # Errors
///
/// Fails only when the input stream ends or the terminal is unusable;
/// invalid input is a retry condition, not an error.
pub fn ask_until_valid<'a>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    choices: &[&'a str],
) -> Result<&'a str> {
    let mut answer = ask(input, output, prompt)?;
    loop {
        if let Some(choice) = choices.iter().copied().find(|c| *c == answer) {
            return Ok(choice);
        }
        answer = ask(input, output, &format!("Invalid input. {prompt}"))?;
    }
}

/// Displays `prompt` and returns the next input line, trimmed and
/// lower-cased. Fails on end of input.
pub fn ask(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from input")?;
    if read == 0 {
        bail!("input stream closed while waiting for a response");
    }
    Ok(line.trim().to_lowercase())
}

/// Yes/no prompt. Only "yes" and "no" are accepted; anything else re-prompts.
pub fn confirm(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<bool> {
    Ok(ask_until_valid(input, output, prompt, &["yes", "no"])? == "yes")
}

/// Collects the city/month/day selection for one session iteration and
/// echoes a one-line summary of it.
pub fn select_filters(input: &mut impl BufRead, output: &mut impl Write) -> Result<Filters> {
    writeln!(output, "Hello! Let's explore some US bikeshare data!")?;

    let city_names: Vec<&str> = City::ALL.iter().map(|c| c.name()).collect();
    let city_answer = ask_until_valid(
        input,
        output,
        "What city do you want to analyze (Chicago, New York City, or Washington)? ",
        &city_names,
    )?;
    let city = City::from_name(city_answer)
        .ok_or_else(|| anyhow!("unrecognized city: {city_answer}"))?;

    let month_answer = ask_until_valid(
        input,
        output,
        "What month do you want to analyze (January - June or All)? ",
        &MONTHS,
    )?;
    let month = MonthFilter::from_name(month_answer)
        .ok_or_else(|| anyhow!("unrecognized month: {month_answer}"))?;

    let day_answer = ask_until_valid(
        input,
        output,
        "What day do you want to analyze (Monday - Sunday or All)? ",
        &DAYS,
    )?;
    let day = DayFilter::from_name(day_answer)
        .ok_or_else(|| anyhow!("unrecognized day: {day_answer}"))?;

    let mut summary = format!("Analyzing data for {}", title_case(city.name()));
    if month != MonthFilter::All {
        summary.push_str(&format!(" in {}", title_case(month_answer)));
    }
    if day != DayFilter::All {
        summary.push_str(&format!(" on {}s", title_case(day_answer)));
    }
    writeln!(output, "{summary}")?;

    Ok(Filters { city, month, day })
}
