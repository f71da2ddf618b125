use std::collections::HashMap;
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::RwLock;

use crate::config::AppState;
use crate::utils::api_response::ApiError;

/// Sliding-window request limiter keyed by client IP.
pub struct RequestLimiter {
    max_hits: usize,
    window: Duration,
    hits: RwLock<HashMap<String, Vec<Instant>>>,
}

impl RequestLimiter {
    pub fn new(max_hits: usize, window: Duration) -> Self {
        Self {
            max_hits,
            window,
            hits: RwLock::new(HashMap::new()),
        }
    }

    pub async fn allow(&self, client: &str) -> bool {
        let mut hits = self.hits.write().await;
        let now = Instant::now();
        let cutoff = now.checked_sub(self.window).unwrap_or(now);

        let entry = hits.entry(client.to_string()).or_default();
        entry.retain(|&hit| hit > cutoff);

        if entry.len() >= self.max_hits {
            return false;
        }
        entry.push(now);
        true
    }
}

pub async fn request_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    // Behind a proxy the client is the first x-forwarded-for hop.
    let client = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|header| header.to_str().ok())
        .map(|value| value.split(',').next().unwrap_or(value).trim())
        .unwrap_or("unknown")
        .to_string();

    if !state.request_limiter.allow(&client).await {
        return ApiError::TooManyRequests.into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blocks_after_the_window_limit() {
        let limiter = RequestLimiter::new(3, Duration::from_secs(60));
        for _ in 0..3 {
            assert!(limiter.allow("10.0.0.1").await);
        }
        assert!(!limiter.allow("10.0.0.1").await);
    }

    #[tokio::test]
    async fn clients_are_limited_independently() {
        let limiter = RequestLimiter::new(1, Duration::from_secs(60));
        assert!(limiter.allow("10.0.0.1").await);
        assert!(!limiter.allow("10.0.0.1").await);
        assert!(limiter.allow("10.0.0.2").await);
    }
}
