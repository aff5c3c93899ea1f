use serde::{Deserialize, Serialize};

/// A catalog entry. Immutable once created; only [`MovieStore`] constructs
/// these, so an id always refers to exactly one record for the process
/// lifetime.
///
/// [`MovieStore`]: crate::MovieStore
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub id: u64,
}
