use serde::Deserialize;

/// Incoming `POST /movies` payload.
///
/// Both fields are optional so that a missing or null field surfaces as a
/// malformed-body error from the handler rather than a framework-level parse
/// failure. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct NewMovieRequest {
    pub title: Option<String>,
    pub year: Option<i32>,
}
