use crate::config::AppState;
use crate::handlers::tag_handler::get_tags_handler;
use crate::middleware::rate_limiter::request_limit_middleware;
use axum::{middleware, routing::get, Router};

pub fn tag_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/tags", get(get_tags_handler))
        .layer(middleware::from_fn_with_state(
            state,
            request_limit_middleware,
        ))
}
