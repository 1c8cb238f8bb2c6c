//! Reference outcome authority for the prize wheel.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::http::header::{CONTENT_TYPE, HeaderName};
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;

pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod routes;
pub mod session;

use config::ServerConfig;
use inventory::Inventory;

#[derive(Clone)]
pub struct AppState {
    inventory: Arc<Mutex<Inventory>>,
    config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig, inventory: Inventory) -> Self {
        Self {
            inventory: Arc::new(Mutex::new(inventory)),
            config: Arc::new(config),
        }
    }

    pub fn inventory(&self) -> MutexGuard<'_, Inventory> {
        // Inventory updates cannot leave it half-written, so a poisoned lock is still usable.
        self.inventory.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

pub fn create_app(state: AppState) -> Router {
    let router = routes::create_router();

    let router = match state.config.allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => router.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([CONTENT_TYPE, HeaderName::from_static("x-admin-secret")])
                .allow_credentials(true),
        ),
        Err(_) => {
            tracing::warn!(
                "Invalid ALLOWED_ORIGIN '{}', cross-origin requests disabled",
                state.config.allowed_origin
            );
            router
        }
    };

    router.with_state(state)
}
