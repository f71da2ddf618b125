use crate::config::AppState;
use crate::handlers::project_handler::get_projects_handler;
use crate::middleware::rate_limiter::request_limit_middleware;
use axum::{middleware, routing::get, Router};

pub fn project_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/projects", get(get_projects_handler))
        .layer(middleware::from_fn_with_state(
            state,
            request_limit_middleware,
        ))
}
