use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A single pick: one movie watched in one round of the club.
///
/// `group_number` identifies the round; `position` is the pick order within
/// that round (1 = first picked, the round maximum = last picked).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Entry {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub group_number: i32,
    pub position: i32,
    pub picked_by_person_id: Option<Uuid>,
    pub watched_at: Option<chrono::NaiveDate>,
    pub added_at: chrono::NaiveDateTime,
}
