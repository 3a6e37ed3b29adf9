use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{BookId, BookRecord, BookStoreError, Result, store::BookStore};

/// Name of the primary key constraint on `books.id`.
const BOOKS_PKEY: &str = "books_pkey";

/// PostgreSQL-backed book store implementation.
#[derive(Clone)]
pub struct PostgresBookStore {
    pool: PgPool,
}

impl PostgresBookStore {
    /// Creates a new PostgreSQL book store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a small pool to the given database.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn column_to_id(raw: i16) -> Result<BookId> {
        BookId::from_i64(i64::from(raw)).ok_or(BookStoreError::CorruptRow {
            column: "id",
            value: i64::from(raw),
        })
    }

    fn row_to_book(row: PgRow) -> Result<BookRecord> {
        let id = Self::column_to_id(row.try_get("id")?)?;
        let raw_rating: i16 = row.try_get("rating")?;
        let rating = u8::try_from(raw_rating).map_err(|_| BookStoreError::CorruptRow {
            column: "rating",
            value: i64::from(raw_rating),
        })?;

        Ok(BookRecord {
            id,
            title: row.try_get("title")?,
            rating,
        })
    }
}

#[async_trait]
impl BookStore for PostgresBookStore {
    async fn insert(&self, book: BookRecord) -> Result<BookRecord> {
        sqlx::query("INSERT INTO books (id, title, rating) VALUES ($1, $2, $3)")
            .bind(book.id.as_i16())
            .bind(&book.title)
            .bind(i16::from(book.rating))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.constraint() == Some(BOOKS_PKEY)
                {
                    return BookStoreError::DuplicateId(book.id);
                }
                BookStoreError::Database(e)
            })?;

        tracing::debug!(book_id = %book.id, "book row inserted");
        Ok(book)
    }

    async fn find_all(&self) -> Result<Vec<BookRecord>> {
        let rows = sqlx::query("SELECT id, title, rating FROM books ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_book).collect()
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<BookRecord>> {
        let row = sqlx::query("SELECT id, title, rating FROM books WHERE id = $1")
            .bind(id.as_i16())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_book).transpose()
    }

    async fn find_all_ids_sorted(&self) -> Result<Vec<BookId>> {
        let ids: Vec<i16> = sqlx::query_scalar("SELECT id FROM books ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        ids.into_iter().map(Self::column_to_id).collect()
    }
}
