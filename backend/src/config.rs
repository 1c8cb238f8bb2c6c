use std::net::{IpAddr, Ipv4Addr};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to
    pub bind_address: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Origin the wheel is served from; credentials are only allowed for it
    pub allowed_origin: String,
    /// Secret expected in `X-Admin-Secret`. Reset is disabled when unset.
    pub admin_secret: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 8000,
            allowed_origin: "http://127.0.0.1:8080".to_string(),
            admin_secret: None,
        }
    }
}

impl ServerConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("BIND_ADDRESS") {
            match addr.parse() {
                Ok(parsed) => config.bind_address = parsed,
                Err(_) => tracing::warn!("Invalid BIND_ADDRESS '{}', using default", addr),
            }
        }

        if let Ok(port) = std::env::var("PORT") {
            match port.parse::<u16>() {
                Ok(parsed) if parsed > 0 => config.port = parsed,
                Ok(_) => tracing::warn!("PORT must be > 0, using default"),
                Err(_) => tracing::warn!("Invalid PORT '{}', using default", port),
            }
        }

        if let Ok(origin) = std::env::var("ALLOWED_ORIGIN") {
            config.allowed_origin = origin;
        }

        match std::env::var("ADMIN_SECRET") {
            Ok(secret) if !secret.is_empty() => config.admin_secret = Some(secret),
            _ => tracing::warn!("ADMIN_SECRET not set, admin reset is disabled"),
        }

        config
    }
}
