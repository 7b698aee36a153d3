use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

use mergington::store::Roster;
use mergington::web;

#[tokio::main]
async fn main() {
    // Load .env when present
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();

    // 2. Seed the in-memory roster
    let roster = Roster::with_seed_data();
    tracing::info!(
        build_id = env!("MERGINGTON_BUILD_ID"),
        activities = roster.len(),
        "roster seeded"
    );

    // 3. Build the application
    let app = web::app(roster);

    // 4. Start the server (with fallback port)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("cannot parse host/port");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "⚠️  Could not bind {}: {}. Trying fallback {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("cannot parse fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("cannot bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    println!("🚀 Server running on http://{}", bound_addr);
    println!("📍 Open http://{}/static/index.html to sign up", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
