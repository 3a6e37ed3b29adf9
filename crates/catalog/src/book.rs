//! Validated values accepted by the catalog.

use book_store::BookRecord;
use common::BookId;
use thiserror::Error;

/// Maximum title length, in characters.
pub const MAX_TITLE_CHARS: usize = 50;

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating.
pub const MAX_RATING: u8 = 10;

/// Reasons a new book is rejected before any id is allocated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookValidationError {
    #[error("Title cannot be blank")]
    TitleBlank,

    #[error("Title cannot exceed 50 characters")]
    TitleTooLong { chars: usize },

    #[error("Rating is required")]
    RatingRequired,

    #[error("Rating must be at least 1")]
    RatingTooLow { rating: i64 },

    #[error("Rating must be at most 10")]
    RatingTooHigh { rating: i64 },
}

/// A non-blank title of at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    /// Validates a raw title. The text is kept as given; only the blank
    /// check looks past surrounding whitespace.
    pub fn parse(raw: impl Into<String>) -> Result<Self, BookValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(BookValidationError::TitleBlank);
        }

        let chars = raw.chars().count();
        if chars > MAX_TITLE_CHARS {
            return Err(BookValidationError::TitleTooLong { chars });
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}

/// A rating between 1 and 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i64) -> Result<Self, BookValidationError> {
        if value < i64::from(MIN_RATING) {
            return Err(BookValidationError::RatingTooLow { rating: value });
        }
        if value > i64::from(MAX_RATING) {
            return Err(BookValidationError::RatingTooHigh { rating: value });
        }
        // Range checked above.
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// A book that passed validation and is waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: Title,
    pub rating: Rating,
}

impl NewBook {
    pub fn new(title: Title, rating: Rating) -> Self {
        Self { title, rating }
    }

    /// Validates loosely typed input, title first, reporting only the
    /// first failure.
    pub fn from_input(
        title: Option<String>,
        rating: Option<i64>,
    ) -> Result<Self, BookValidationError> {
        let title = Title::parse(title.unwrap_or_default())?;
        let rating = Rating::new(rating.ok_or(BookValidationError::RatingRequired)?)?;
        Ok(Self { title, rating })
    }

    /// Attaches an allocated id, producing the record to persist.
    pub fn into_record(self, id: BookId) -> BookRecord {
        BookRecord::new(id, self.title, self.rating.value())
    }
}
