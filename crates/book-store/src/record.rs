use serde::{Deserialize, Serialize};

use crate::BookId;

/// A book as persisted by the store.
///
/// Records are written once by the catalog and never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: BookId,
    pub title: String,
    pub rating: u8,
}

impl BookRecord {
    pub fn new(id: BookId, title: impl Into<String>, rating: u8) -> Self {
        Self {
            id,
            title: title.into(),
            rating,
        }
    }
}
