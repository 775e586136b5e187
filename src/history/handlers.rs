use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::AuthUser,
    error::ApiError,
    history::{
        dto::{SaveSearchRequest, SavedResponse},
        repo::SearchRecord,
    },
    state::AppState,
};

pub fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/search-history", post(save_search))
        .route("/search-history", get(list_search))
}

#[instrument(skip(state, claims, payload))]
pub async fn save_search(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<SaveSearchRequest>,
) -> Result<(StatusCode, Json<SavedResponse>), ApiError> {
    let record = SearchRecord::create(
        &state.db,
        &claims.email,
        &payload.search_url,
        &payload.search_response,
    )
    .await?;

    info!(record_id = %record.id, email = %claims.email, "search saved");
    Ok((
        StatusCode::CREATED,
        Json(SavedResponse {
            message: "Saved successfully".into(),
        }),
    ))
}

#[instrument(skip(state, claims))]
pub async fn list_search(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<SearchRecord>>, ApiError> {
    let records = SearchRecord::list_by_email(&state.db, &claims.email).await?;
    Ok(Json(records))
}
