use crate::config::AppState;
use crate::handlers::blog_handler::get_blogs_handler;
use crate::middleware::rate_limiter::request_limit_middleware;
use axum::{middleware, routing::get, Router};

pub fn blog_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/blogs", get(get_blogs_handler))
        .layer(middleware::from_fn_with_state(
            state,
            request_limit_middleware,
        ))
}
