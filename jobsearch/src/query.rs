//! Splits free-text input like "Nurse in Malmö" into search terms.

use std::fmt;

const DELIMITER: &str = " in ";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub profession: String,
    pub city: String,
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.city.is_empty() {
            write!(f, "{}", self.profession)
        } else {
            write!(f, "{} in {}", self.profession, self.city)
        }
    }
}

/// Parses a raw query. Never fails: input without " in " becomes a
/// profession-only query.
///
/// Only the first two segments are used, so "A in B in C" searches for
/// "A" in "B".
pub fn parse_query(input: &str) -> SearchQuery {
    let mut parts = input.split(DELIMITER);
    let profession = parts.next().unwrap_or_default().trim().to_string();
    let city = parts.next().unwrap_or_default().trim().to_string();

    SearchQuery { profession, city }
}
