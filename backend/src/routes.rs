use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::cookie::CookieJar;
use spinwheel_shared::constants::{
    ADMIN_INVENTORY_ENDPOINT, ADMIN_RESET_ENDPOINT, ADMIN_SECRET_HEADER, SPIN_ENDPOINT,
    STATUS_ENDPOINT,
};
use spinwheel_shared::wheel::{InventoryStats, SpinResponse, StatusResponse};

use crate::error::ApiError;
use crate::session::ensure_session;
use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route(SPIN_ENDPOINT, post(spin_wheel))
        .route(STATUS_ENDPOINT, get(spin_status))
        .route(ADMIN_INVENTORY_ENDPOINT, get(admin_inventory))
        .route(ADMIN_RESET_ENDPOINT, post(admin_reset))
}

#[axum::debug_handler]
async fn spin_wheel(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<SpinResponse>), ApiError> {
    let (jar, session) = ensure_session(jar);

    let response = {
        let mut inventory = state.inventory();
        inventory.spin(&session, &mut rand::thread_rng())
    };

    match &response {
        Ok(result) if result.prize => {
            tracing::info!("🎡 WHEEL SPIN: session {} won {} 🎉", session, result.label)
        }
        Ok(result) => tracing::info!("🎡 WHEEL SPIN: session {} landed on {}", session, result.label),
        Err(_) => tracing::info!("🎡 WHEEL SPIN: session {} tried to spin again", session),
    }
    if matches!(&response, Ok(result) if result.all_prizes_gone) {
        tracing::warn!("All prizes have been claimed");
    }

    Ok((jar, Json(response?)))
}

async fn spin_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        all_prizes_gone: state.inventory().all_prizes_gone(),
    })
}

async fn admin_inventory(State(state): State<AppState>) -> Json<InventoryStats> {
    Json(state.inventory().stats())
}

async fn admin_reset(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<InventoryStats>, ApiError> {
    let provided = headers
        .get(ADMIN_SECRET_HEADER)
        .and_then(|value| value.to_str().ok());

    match (state.config.admin_secret.as_deref(), provided) {
        (Some(expected), Some(provided)) if expected == provided => {}
        _ => {
            tracing::warn!("Rejected admin reset with missing or wrong secret");
            return Err(ApiError::Unauthorized);
        }
    }

    let stats = {
        let mut inventory = state.inventory();
        inventory.reset();
        inventory.stats()
    };
    tracing::warn!("Inventory reset, all spins and sessions cleared");
    Ok(Json(stats))
}
