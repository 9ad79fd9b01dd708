use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Entry, FactSnapshot, Movie, Person, Rating};

use super::decimal_to_f64;

#[derive(FromRow)]
struct RatingRow {
    person_id: Uuid,
    entry_id: Uuid,
    score: Decimal,
    created_at: chrono::NaiveDateTime,
    updated_at: chrono::NaiveDateTime,
}

impl From<RatingRow> for Rating {
    fn from(row: RatingRow) -> Self {
        Rating {
            person_id: row.person_id,
            entry_id: row.entry_id,
            score: decimal_to_f64(row.score),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct SnapshotRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SnapshotRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Reads all four fact collections in one transaction so the engine
    /// sees a single consistent point in time.
    pub async fn fetch(&self) -> Result<FactSnapshot> {
        let mut tx = self.pool.begin().await?;

        let persons: Vec<Person> =
            sqlx::query_as("SELECT id, initial, name FROM persons ORDER BY id")
                .fetch_all(&mut *tx)
                .await?;

        let movies: Vec<Movie> = sqlx::query_as(
            "SELECT id, title, release_year, runtime_minutes, poster_url FROM movies ORDER BY id",
        )
        .fetch_all(&mut *tx)
        .await?;

        let entries: Vec<Entry> = sqlx::query_as(
            r#"
            SELECT id, movie_id, group_number, position, picked_by_person_id, watched_at, added_at
            FROM entries
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        let rating_rows: Vec<RatingRow> = sqlx::query_as(
            r#"
            SELECT person_id, entry_id, score, created_at, updated_at
            FROM ratings
            ORDER BY entry_id, person_id
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(FactSnapshot {
            persons,
            movies,
            entries,
            ratings: rating_rows.into_iter().map(Rating::from).collect(),
        })
    }
}
