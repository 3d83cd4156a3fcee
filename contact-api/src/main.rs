/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Standalone entry point for the mock contact endpoint.
//!
//! The website's SSR server normally hosts the same router; this binary is
//! handy when working on the front end against `trunk serve` or similar.

use contact_api::config::Config;
use contact_api::routes;
use contact_api::state::AppState;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().expect("failed to load configuration");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState::new(&config);
    let app = routes::router().layer(cors).with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind listener");

    tracing::info!(
        "Contact endpoint listening on {} (simulated delay {:?})",
        config.listen_addr,
        config.simulated_delay
    );

    axum::serve(listener, app).await.expect("server error");
}
