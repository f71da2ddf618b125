use axum::{extract::State, response::IntoResponse, Json};

use crate::config::AppState;
use crate::repositories::tag_repository::TagRepository;
use crate::utils::api_response::ApiError;

// Route: /tags
pub async fn get_tags_handler(State(state): State<AppState>) -> impl IntoResponse {
    match TagRepository::find_all(&state.db).await {
        Ok(tags) => Json(tags).into_response(),
        Err(err) => {
            tracing::error!("get_tags failed: {}", err);
            ApiError::Internal.into_response()
        }
    }
}
