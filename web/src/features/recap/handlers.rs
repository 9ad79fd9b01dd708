use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::recap::RecapReport};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/recap",
    responses(
        (status = 200, description = "Season recap computed from the current facts", body = RecapReport),
    ),
    tag = "recap"
)]
pub async fn get_recap(State(db): State<Database>) -> Result<Response, WebError> {
    let report = services::get_recap(db.pool()).await?;

    Ok(Json(report).into_response())
}
