use sqlx::PgPool;
use storage::{error::Result, models::Rating, repository::rating::RatingRepository};
use uuid::Uuid;

pub async fn upsert_rating(
    pool: &PgPool,
    person_id: Uuid,
    entry_id: Uuid,
    score: f64,
) -> Result<Rating> {
    let repo = RatingRepository::new(pool);
    repo.upsert(person_id, entry_id, score).await
}

pub async fn delete_rating(pool: &PgPool, person_id: Uuid, entry_id: Uuid) -> Result<()> {
    let repo = RatingRepository::new(pool);
    repo.delete(person_id, entry_id).await
}
