pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod views;


use axum::{Router, response::Redirect, routing::get};
use tower_http::trace::TraceLayer;

use handlers::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/lookup") }))
        .route("/lookup", get(handlers::lookup::lookup_page))
        .route(
            "/entry",
            get(handlers::entry::entry_page).post(handlers::entry::submit_sale),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
