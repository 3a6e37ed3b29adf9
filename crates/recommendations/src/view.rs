use serde::{Deserialize, Serialize};

/// A book as received from the book service.
///
/// Decoding is lenient: unknown fields are ignored and missing fields
/// decode as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookView {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
}

impl BookView {
    pub fn new(id: i64, title: impl Into<String>, rating: i64) -> Self {
        Self {
            id: Some(id),
            title: Some(title.into()),
            rating: Some(rating),
        }
    }
}
