use spinwheel_shared::WheelConfig;
use web_sys::window;

const DEV_API_BASE_URL: &str = "http://127.0.0.1:8000";

pub fn get_api_base_url() -> String {
    // Build-time override for deployments where the authority lives elsewhere
    if let Some(url) = option_env!("SPINWHEEL_API_URL") {
        return url.trim_end_matches('/').to_string();
    }

    if let Some(window) = window() {
        let location = window.location();
        if let (Ok(protocol), Ok(host)) = (location.protocol(), location.host()) {
            // trunk serve runs on its own port; the authority stays on the dev port
            if !host.ends_with(":8080") {
                return format!("{}//{}", protocol, host);
            }
        }
    }

    DEV_API_BASE_URL.to_string()
}

pub fn wheel_config() -> WheelConfig {
    WheelConfig::default()
}
