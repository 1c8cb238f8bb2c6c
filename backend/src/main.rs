use std::net::SocketAddr;

use spinwheel_backend::config::ServerConfig;
use spinwheel_backend::inventory::Inventory;
use spinwheel_backend::{create_app, logging, AppState};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::setup();

    let config = ServerConfig::load_or_default();
    let addr = SocketAddr::new(config.bind_address, config.port);
    let app = create_app(AppState::new(config, Inventory::with_defaults()));

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("🎡 Spin wheel authority listening on {}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server stopped: {}", e);
    }
}
