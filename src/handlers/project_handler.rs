use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::config::AppState;
use crate::models::project_model::ProjectFilterParams;
use crate::repositories::project_repository::ProjectRepository;
use crate::utils::api_response::ApiError;

// Route: /projects?lang=
pub async fn get_projects_handler(
    State(state): State<AppState>,
    Query(params): Query<ProjectFilterParams>,
) -> impl IntoResponse {
    let language = match params.resolve() {
        Ok(language) => language,
        Err(err) => return err.into_response(),
    };

    match ProjectRepository::find_by_language(&state.db, language).await {
        Ok(projects) => Json(projects).into_response(),
        Err(err) => {
            tracing::error!("get_projects failed: {}", err);
            ApiError::Internal.into_response()
        }
    }
}
