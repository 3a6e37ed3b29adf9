//! Gap-filling slot allocation.

use common::{BookId, MAX_SLOTS};

use crate::error::CatalogError;

/// Returns the lowest free slot given the ids currently in use.
///
/// `used` must be ascending and free of duplicates, which the store's
/// uniqueness guarantees. Fails fast with `CapacityExceeded` once every
/// slot is taken, before scanning.
pub fn next_slot(used: &[BookId]) -> Result<BookId, CatalogError> {
    if used.len() >= MAX_SLOTS {
        return Err(CatalogError::CapacityExceeded {
            capacity: MAX_SLOTS,
        });
    }

    let slot = used
        .iter()
        .enumerate()
        .find(|(position, id)| id.as_usize() != *position)
        .map_or(used.len(), |(position, _)| position);

    // slot < MAX_SLOTS, so it fits in a u8.
    Ok(BookId::new(slot as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u8]) -> Vec<BookId> {
        raw.iter().copied().map(BookId::new).collect()
    }

    #[test]
    fn empty_catalog_starts_at_zero() {
        assert_eq!(next_slot(&[]).unwrap(), BookId::new(0));
    }

    #[test]
    fn contiguous_ids_append_at_end() {
        assert_eq!(next_slot(&ids(&[0, 1, 2, 3, 4])).unwrap(), BookId::new(5));
    }

    #[test]
    fn gap_at_start_is_filled_first() {
        assert_eq!(next_slot(&ids(&[1, 2, 3])).unwrap(), BookId::new(0));
    }

    #[test]
    fn gap_in_middle_is_filled() {
        assert_eq!(next_slot(&ids(&[0, 1, 3, 4])).unwrap(), BookId::new(2));
    }

    #[test]
    fn lowest_of_several_gaps_wins() {
        assert_eq!(next_slot(&ids(&[0, 2, 5, 9])).unwrap(), BookId::new(1));
    }

    #[test]
    fn last_free_slot_is_twenty() {
        let used: Vec<u8> = (0..20).collect();
        assert_eq!(next_slot(&ids(&used)).unwrap(), BookId::new(20));
    }

    #[test]
    fn full_catalog_is_rejected() {
        let used: Vec<u8> = (0..=20).collect();
        let err = next_slot(&ids(&used)).unwrap_err();
        assert!(matches!(err, CatalogError::CapacityExceeded { capacity: 21 }));
        assert_eq!(err.to_string(), "Maximum capacity reached");
    }
}
