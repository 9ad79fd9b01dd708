use axum::{
    Router,
    routing::{delete, put},
};
use storage::Database;

use super::handlers::{delete_rating, upsert_rating};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/:entry_id/ratings/:person_id", put(upsert_rating))
        .route("/:entry_id/ratings/:person_id", delete(delete_rating))
}
