pub mod books;
pub mod health;
pub mod metrics;
pub mod recommended;
