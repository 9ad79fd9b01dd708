use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub release_year: Option<i32>,
    pub runtime_minutes: Option<i32>,
    pub poster_url: Option<String>,
}
