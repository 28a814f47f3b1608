//! Campsite and comment JSON routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use campsite_client::net::types::{Campsite, CampsiteId, Comment, CommentSubmission};

use crate::services::campsite::{self, CampsiteError};
use crate::state::AppState;

/// `GET /api/campsites`: list all campsites.
pub async fn list_campsites(State(state): State<AppState>) -> Json<Vec<Campsite>> {
    let store = state.store.read().await;
    Json(store.list_campsites().to_vec())
}

/// `GET /api/campsites/:id`: fetch one campsite.
pub async fn get_campsite(
    State(state): State<AppState>,
    Path(id): Path<CampsiteId>,
) -> Result<Json<Campsite>, (StatusCode, Json<serde_json::Value>)> {
    let store = state.store.read().await;
    let campsite = store.campsite(id).map_err(campsite_error_response)?;
    Ok(Json(campsite.clone()))
}

/// `GET /api/campsites/:id/comments`: comments in insertion order.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<CampsiteId>,
) -> Result<Json<Vec<Comment>>, (StatusCode, Json<serde_json::Value>)> {
    let store = state.store.read().await;
    let comments = store.comments_for(id).map_err(campsite_error_response)?;
    Ok(Json(comments))
}

/// `POST /api/comments`: validate and store a comment.
pub async fn post_comment(
    State(state): State<AppState>,
    Json(submission): Json<CommentSubmission>,
) -> Result<(StatusCode, Json<Comment>), (StatusCode, Json<serde_json::Value>)> {
    let campsite_id = submission.campsite_id;
    let date = campsite::now_timestamp();
    let comment = state
        .store
        .write()
        .await
        .add_comment(submission, date)
        .map_err(|e| {
            tracing::info!(campsite_id, error = %e, "comment rejected");
            campsite_error_response(e)
        })?;

    tracing::info!(campsite_id, comment_id = comment.id, "comment posted");
    Ok((StatusCode::CREATED, Json(comment)))
}

pub(crate) fn campsite_error_to_status(err: &CampsiteError) -> StatusCode {
    match err {
        CampsiteError::NotFound(_) => StatusCode::NOT_FOUND,
        CampsiteError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CampsiteError::IdsExhausted => StatusCode::INSUFFICIENT_STORAGE,
    }
}

/// Status plus a JSON body: `{ "error": ... }`, with `"fields"` for validation failures.
pub(crate) fn campsite_error_response(err: CampsiteError) -> (StatusCode, Json<serde_json::Value>) {
    let status = campsite_error_to_status(&err);
    let body = match &err {
        CampsiteError::NotFound(_) | CampsiteError::IdsExhausted => serde_json::json!({ "error": err.to_string() }),
        CampsiteError::Invalid(fields) => serde_json::json!({ "error": err.to_string(), "fields": fields }),
    };
    (status, Json(body))
}

#[cfg(test)]
#[path = "campsites_test.rs"]
mod tests;
