pub mod types;

pub use types::{BookId, MAX_BOOK_ID, MAX_SLOTS};
