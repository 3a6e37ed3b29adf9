use serde::{Deserialize, Serialize};

/// Number of slots in the catalog. Ids span `0..MAX_SLOTS`.
pub const MAX_SLOTS: usize = 21;

/// Highest id a book can be assigned.
pub const MAX_BOOK_ID: u8 = (MAX_SLOTS - 1) as u8;

/// Identifier of a book within the catalog.
///
/// Ids are compact slot numbers assigned by the catalog, never chosen by
/// clients. Wrapping the raw integer keeps slot numbers from being mixed
/// up with ratings or positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u8);

impl BookId {
    /// Creates a book id from a raw slot number.
    pub const fn new(slot: u8) -> Self {
        Self(slot)
    }

    /// Returns the raw slot number.
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Returns the id widened for storage columns.
    pub fn as_i16(&self) -> i16 {
        i16::from(self.0)
    }

    /// Returns the id as a position in the slot range.
    pub fn as_usize(&self) -> usize {
        usize::from(self.0)
    }

    /// Converts an externally supplied integer into an id.
    ///
    /// Returns `None` for values that can never name a slot.
    pub fn from_i64(value: i64) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|slot| *slot <= MAX_BOOK_ID)
            .map(Self)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for BookId {
    fn from(slot: u8) -> Self {
        Self(slot)
    }
}

impl From<BookId> for u8 {
    fn from(id: BookId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_book_id_is_last_slot() {
        assert_eq!(usize::from(MAX_BOOK_ID), MAX_SLOTS - 1);
    }

    #[test]
    fn from_i64_accepts_slot_range() {
        assert_eq!(BookId::from_i64(0), Some(BookId::new(0)));
        assert_eq!(BookId::from_i64(20), Some(BookId::new(20)));
    }

    #[test]
    fn from_i64_rejects_values_outside_slot_range() {
        assert_eq!(BookId::from_i64(-1), None);
        assert_eq!(BookId::from_i64(21), None);
        assert_eq!(BookId::from_i64(i64::MAX), None);
    }

    #[test]
    fn book_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&BookId::new(7)).unwrap();
        assert_eq!(json, "7");
        let id: BookId = serde_json::from_str("7").unwrap();
        assert_eq!(id, BookId::new(7));
    }
}
