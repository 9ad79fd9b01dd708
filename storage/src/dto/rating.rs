use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertRatingRequest {
    #[validate(range(min = 0.0, max = 10.0, message = "score must be between 0 and 10"))]
    pub score: f64,
}
