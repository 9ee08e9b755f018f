//! Console and log formatting helpers shared by the report passes.

use serde::Serialize;
use tracing::debug;

/// Prints the separator line between report sections.
pub fn line_break() {
    println!("{}", "-".repeat(40));
}

/// Logs a computed report as a JSON line for the structured log file.
pub fn log_json<S: Serialize>(stats: &S) {
    match serde_json::to_string(stats) {
        Ok(json) => debug!(%json, "Report computed"),
        Err(e) => debug!(error = %e, "Report serialization failed"),
    }
}

/// Upper-cases the first letter of each word, turning prompt-form names
/// into display form ("new york city" -> "New York City").
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("chicago"), "Chicago");
        assert_eq!(title_case("new york city"), "New York City");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_log_json_does_not_panic() {
        #[derive(Serialize)]
        struct Sample {
            count: usize,
        }
        log_json(&Sample { count: 3 });
    }
}
