use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One person's score for one entry, in [0.0, 10.0].
/// At most one rating exists per (person, entry) pair; writes are upserts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Rating {
    pub person_id: Uuid,
    pub entry_id: Uuid,
    pub score: f64,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
