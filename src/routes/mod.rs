use crate::config::AppState;
use axum::http::Method;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod blog_route;
pub mod project_route;
pub mod tag_route;

pub fn create_routes(state: AppState) -> Router<AppState> {
    // The public site only ever reads; everything else stays blocked.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .nest(
            "/api/v1",
            blog_route::blog_routes(state.clone())
                .merge(project_route::project_routes(state.clone()))
                .merge(tag_route::tag_routes(state)),
        )
        // Health check
        .route("/api/health", axum::routing::get(|| async { "OK" }))
        .layer(cors)
}
