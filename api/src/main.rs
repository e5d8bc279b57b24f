//! Toy Store API Server
//!
//! CRUD over toys (with their producers) and users, persisted in PostgreSQL.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresProducerRepository, PostgresToyRepository, PostgresUserRepository};
use app::{ToyCrudService, UserCrudService};
use config::Config;
use domain::ports::{ProducerRepository, ToyRepository, UserRepository};

pub type ToyService = ToyCrudService<dyn ToyRepository, dyn ProducerRepository>;
pub type UserService = UserCrudService<dyn UserRepository>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub toy_service: Arc<ToyService>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(
        toys: Arc<dyn ToyRepository>,
        producers: Arc<dyn ProducerRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            toy_service: Arc::new(ToyCrudService::new(toys, producers)),
            user_service: Arc::new(UserCrudService::new(users)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with every route and middleware layer
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Products
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/:id",
            get(handlers::get_product)
                .patch(handlers::update_product)
                .delete(handlers::delete_product),
        )
        // Users
        .route(
            "/users/:id",
            get(handlers::get_user).delete(handlers::delete_user),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,toy_store_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting toy store API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters and services
    let state = AppState::new(
        Arc::new(PostgresToyRepository::new(db.clone())),
        Arc::new(PostgresProducerRepository::new(db.clone())),
        Arc::new(PostgresUserRepository::new(db.clone())),
    );

    let app = build_router(state);

    // Start server
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Err(e) = db.close().await {
        tracing::warn!("Error closing database connection: {}", e);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
