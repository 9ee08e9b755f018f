//! Paginated raw-row viewer over the filtered dataset.

use anyhow::Result;

use std::io::{BufRead, Write};

use crate::dataset::Dataset;
use crate::prompt;

pub const PAGE_SIZE: usize = 5;

const FIRST_PAGE_PROMPT: &str = "Would you like to see the first 5 rows of raw data? (yes/no) ";
const NEXT_PAGE_PROMPT: &str = "Would you like to see the next 5 rows of raw data? (yes/no) ";

/// Offers the filtered rows five at a time, in load order. Stops as soon
/// as the user declines, or announces the end once the cursor passes the
/// last row. Short final pages print only the remaining rows.
pub fn browse(
    input: &mut impl BufRead,
    output: &mut impl Write,
    dataset: &Dataset,
) -> Result<()> {
    let mut cursor = 0usize;

    if !prompt::confirm(input, output, FIRST_PAGE_PROMPT)? {
        return Ok(());
    }
    loop {
        for (offset, trip) in dataset.trips[cursor..].iter().take(PAGE_SIZE).enumerate() {
            writeln!(output, "#{:<6} {trip}", cursor + offset)?;
        }
        cursor += PAGE_SIZE;

        if cursor >= dataset.len() {
            writeln!(output, "You have reached the end of the requested data")?;
            return Ok(());
        }
        if !prompt::confirm(input, output, NEXT_PAGE_PROMPT)? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testutil::trip;
    use crate::dataset::City;
    use std::io::Cursor;

    fn dataset(rows: usize) -> Dataset {
        Dataset {
            city: City::Chicago,
            trips: (0..rows)
                .map(|i| trip("2017-06-05 08:05:00", &format!("Station {i}"), "B", 60.0))
                .collect(),
        }
    }

    fn run(dataset: &Dataset, answers: &str) -> String {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        browse(&mut input, &mut output, dataset).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn rows_printed(transcript: &str) -> usize {
        transcript.lines().filter(|l| l.starts_with('#')).count()
    }

    #[test]
    fn test_decline_shows_nothing() {
        let transcript = run(&dataset(12), "no\n");
        assert_eq!(rows_printed(&transcript), 0);
        assert!(!transcript.contains("reached the end"));
    }

    #[test]
    fn test_pages_until_exhausted() {
        // 12 rows: pages of 5, 5, then 2; the third "yes" is never needed
        // because the end announcement replaces the fourth prompt.
        let transcript = run(&dataset(12), "yes\nyes\nyes\n");
        assert_eq!(rows_printed(&transcript), 12);
        assert!(transcript.contains("You have reached the end of the requested data"));
        assert_eq!(transcript.matches("(yes/no)").count(), 3);
    }

    #[test]
    fn test_exact_multiple_of_page_size() {
        let transcript = run(&dataset(10), "yes\nyes\n");
        assert_eq!(rows_printed(&transcript), 10);
        assert!(transcript.contains("You have reached the end of the requested data"));
    }

    #[test]
    fn test_stop_midway() {
        let transcript = run(&dataset(12), "yes\nno\n");
        assert_eq!(rows_printed(&transcript), PAGE_SIZE);
        assert!(!transcript.contains("reached the end"));
    }

    #[test]
    fn test_empty_dataset_announces_end() {
        let transcript = run(&dataset(0), "yes\n");
        assert_eq!(rows_printed(&transcript), 0);
        assert!(transcript.contains("You have reached the end of the requested data"));
    }

    #[test]
    fn test_short_final_page() {
        let transcript = run(&dataset(7), "yes\nyes\n");
        assert_eq!(rows_printed(&transcript), 7);
        assert!(transcript.contains("You have reached the end of the requested data"));
    }
}
