use sqlx::PgPool;
use storage::{
    dto::recap::RecapReport, error::Result, repository::snapshot::SnapshotRepository,
    services::recap,
};

/// Fetch one consistent snapshot and recompute the full recap from it.
pub async fn get_recap(pool: &PgPool) -> Result<RecapReport> {
    let repo = SnapshotRepository::new(pool);
    let snapshot = repo.fetch().await?;
    recap::build_report(&snapshot)
}
