use std::{env, net::SocketAddr, sync::Arc};

#[macro_use]
extern crate lazy_static;

use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{
    app::envy::Envy,
    store::{postgres::PgStore, TransactionStore},
};

mod app;
mod store;
mod transactions;

pub struct AppState {
    pub store: Arc<dyn TransactionStore>,
    pub client: reqwest::Client,
    pub envy: Arc<Envy>,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // seed
        .route(
            "/initialize",
            get(transactions::controller::initialize_database),
        )
        // transactions
        .route(
            "/transactions",
            get(transactions::controller::list_transactions),
        )
        .route("/statistics", get(transactions::controller::get_statistics))
        .route(
            "/bar-chart",
            get(transactions::controller::get_price_range_data),
        )
        .route(
            "/pie-chart",
            get(transactions::controller::get_category_data),
        )
        .route(
            "/combined",
            get(transactions::controller::get_combined_data),
        )
        // layers
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let max_connections = envy.database_max_connections.to_owned().unwrap_or(50);

    let store = PgStore::connect(&envy.database_url, max_connections)
        .await
        .expect("failed to connect to database");
    store.init().await.expect("failed to create schema");

    tracing::info!("connected to db");

    let store = Arc::new(store);
    let state = Arc::new(AppState {
        store: store.clone(),
        client: reqwest::Client::new(),
        envy: Arc::new(envy),
    });

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("server error: {}", e);
    }

    store.close().await;
    tracing::info!("db pool closed");
}
