//! Documentation of a club-management backend.
//!
//! # General Infrastructure
//! - Students browse clubs and events through the frontend pages
//! - The frontend talks to this server, which owns the MySQL schema
//! - The one invariant-bearing path is event registration: capacity and
//!   duplicate checks plus the denormalized `numRegistered`/`isFull`
//!   columns must move together, so that path runs as a single locked
//!   transaction ([`registration`])
//!
//! # Routes
//! - `POST /student/events`: register a student for an event
//! - `GET /events/{eventID}`: event details including capacity columns
//! - `GET /events/{eventID}/registered-students`: roster with emails
//!
//! # Setup
//!
//! Apply the schema and sample rows.
//! ```sh
//! cargo run --bin seed
//! ```
//!
//! Run the server.
//! ```sh
//! RUST_LOG=info cargo run --bin clubs
//! ```
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod registration;
pub mod routes;
pub mod state;

use routes::{event_handler, register_handler, registered_students_handler};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/student/events", post(register_handler))
        .route("/events/{eventID}", get(event_handler))
        .route(
            "/events/{eventID}/registered-students",
            get(registered_students_handler),
        )
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
