use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::config::AppState;
use crate::models::blog_model::BlogFilterParams;
use crate::repositories::blog_repository::BlogRepository;
use crate::utils::api_response::ApiError;

// Route: /blogs?lang= plus optional match / tag / quantity
pub async fn get_blogs_handler(
    State(state): State<AppState>,
    Query(params): Query<BlogFilterParams>,
) -> impl IntoResponse {
    let (language, filter) = match params.resolve() {
        Ok(resolved) => resolved,
        Err(err) => return err.into_response(),
    };

    match BlogRepository::find_by_filter(&state.db, language, &filter).await {
        Ok(blogs) => Json(blogs).into_response(),
        Err(err) => {
            tracing::error!("get_blogs failed: {}", err);
            ApiError::Internal.into_response()
        }
    }
}
