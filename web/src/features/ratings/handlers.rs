use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::rating::UpsertRatingRequest, models::Rating};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    put,
    path = "/api/entries/{entry_id}/ratings/{person_id}",
    params(
        ("entry_id" = Uuid, Path, description = "Entry being rated"),
        ("person_id" = Uuid, Path, description = "Person giving the rating"),
    ),
    request_body = UpsertRatingRequest,
    responses(
        (status = 200, description = "Rating created or replaced", body = Rating),
        (status = 400, description = "Score outside [0, 10]"),
        (status = 404, description = "Entry or person does not exist"),
    ),
    tag = "ratings"
)]
pub async fn upsert_rating(
    State(db): State<Database>,
    Path((entry_id, person_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpsertRatingRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let rating = services::upsert_rating(db.pool(), person_id, entry_id, request.score)
        .await
        .map_err(|e| {
            if e.is_foreign_key_violation() {
                WebError::NotFound
            } else {
                WebError::from(e)
            }
        })?;

    Ok(Json(rating).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/entries/{entry_id}/ratings/{person_id}",
    params(
        ("entry_id" = Uuid, Path, description = "Entry the rating belongs to"),
        ("person_id" = Uuid, Path, description = "Person whose rating is removed"),
    ),
    responses(
        (status = 204, description = "Rating removed"),
        (status = 404, description = "No such rating"),
    ),
    tag = "ratings"
)]
pub async fn delete_rating(
    State(db): State<Database>,
    Path((entry_id, person_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::delete_rating(db.pool(), person_id, entry_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
