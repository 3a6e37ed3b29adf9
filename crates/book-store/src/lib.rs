pub mod error;
pub mod memory;
pub mod postgres;
pub mod record;
pub mod store;

pub use common::BookId;
pub use error::{BookStoreError, Result};
pub use memory::InMemoryBookStore;
pub use postgres::PostgresBookStore;
pub use record::BookRecord;
pub use store::{BookStore, BookStoreExt};
