use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Rating;

use super::decimal_to_f64;

#[derive(FromRow)]
struct RatingRow {
    person_id: Uuid,
    entry_id: Uuid,
    score: Decimal,
    created_at: chrono::NaiveDateTime,
    updated_at: chrono::NaiveDateTime,
}

pub struct RatingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RatingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Inserts or replaces the one rating a person has for an entry.
    pub async fn upsert(&self, person_id: Uuid, entry_id: Uuid, score: f64) -> Result<Rating> {
        let score = Decimal::from_f64_retain(score).ok_or_else(|| {
            StorageError::ConstraintViolation("score is not a finite number".to_string())
        })?;

        let row: RatingRow = sqlx::query_as(
            r#"
            INSERT INTO ratings (person_id, entry_id, score)
            VALUES ($1, $2, $3)
            ON CONFLICT (person_id, entry_id)
            DO UPDATE SET score = EXCLUDED.score, updated_at = NOW()
            RETURNING person_id, entry_id, score, created_at, updated_at
            "#,
        )
        .bind(person_id)
        .bind(entry_id)
        .bind(score)
        .fetch_one(self.pool)
        .await?;

        Ok(Rating {
            person_id: row.person_id,
            entry_id: row.entry_id,
            score: decimal_to_f64(row.score),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }

    pub async fn delete(&self, person_id: Uuid, entry_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM ratings WHERE person_id = $1 AND entry_id = $2")
            .bind(person_id)
            .bind(entry_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
