mod config;
mod entities;
mod handlers;
mod middleware;
mod models;
mod repositories;
mod routes;
mod seeders;
mod utils;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use config::{AppState, Config};
use dotenvy::dotenv;
use middleware::rate_limiter::RequestLimiter;
use sea_orm::Database;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    let cfg = Config::init();
    println!("🚀 Starting Portfolio Backend...");

    // 1. Database Connection
    println!("📡 Connecting to Database...");
    let db = Database::connect(&cfg.database_url)
        .await
        .expect("🔥 Failed to connect to Database!");
    println!("✅ Database Connected!");

    // 2. Database Seeding
    println!("🌱 Running Seeders...");
    if let Err(e) = seeders::run_seeders(&db).await {
        tracing::error!("❌ Seeding failed: {}", e);
    } else {
        println!("✅ Seeding Successful!");
    }

    // 3. Build App State
    let request_limiter = Arc::new(RequestLimiter::new(100, Duration::from_secs(15 * 60)));

    let state = AppState {
        db,
        request_limiter,
    };

    // 4. Initialize Router
    let app = routes::create_routes(state.clone()).with_state(state);

    // 5. Start Server
    let addr_str = format!("{}:{}", cfg.server_host, cfg.server_port);
    let addr: SocketAddr = addr_str.parse().expect("Invalid address");

    println!("🎯 Server ready! Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
