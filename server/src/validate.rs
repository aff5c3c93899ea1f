use chrono::{Datelike, Utc};

/// Longest accepted title, in characters.
pub const MAX_TITLE_LEN: usize = 100;

/// Bounds for the `year` field of a new movie.
///
/// The lower bound is fixed; the upper bound tracks the wall clock so that a
/// movie may be announced up to `headroom` years ahead. The bound is computed
/// per request, never baked in at startup.
#[derive(Debug, Clone, Copy)]
pub struct YearPolicy {
    pub min_year: i32,
    pub headroom: i32,
}

impl Default for YearPolicy {
    fn default() -> Self {
        // 1888: the year of the earliest surviving film.
        Self {
            min_year: 1888,
            headroom: 1,
        }
    }
}

impl YearPolicy {
    /// Latest accepted year, recomputed from the current UTC date.
    pub fn max_year(&self) -> i32 {
        Utc::now().year() + self.headroom
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.min_year && year <= self.max_year()
    }
}

/// Collect every violation in a new-movie payload, in the order checked:
/// year range, empty title, title length. Empty result means the payload is
/// acceptable.
pub fn validate_new_movie(title: &str, year: i32, policy: &YearPolicy) -> Vec<String> {
    let mut violations = Vec::new();

    if !policy.contains(year) {
        violations.push(format!(
            "Year must be between {} and {}",
            policy.min_year,
            policy.max_year()
        ));
    }
    if title.is_empty() {
        violations.push("Title must not be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LEN {
        violations.push("Title too long".to_string());
    }

    violations
}
