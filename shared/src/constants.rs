pub const FULL_ROTATION: f64 = 360.0;
pub const POINTER_ANGLE: f64 = -90.0;

pub const DEFAULT_TURNS: u32 = 5;
pub const SPIN_DURATION_MS: u32 = 3000;
pub const JITTER_MARGIN_DEG: f64 = 4.0;
/// Smallest gap kept from a slice border, whatever the configured margin.
pub const MIN_JITTER_MARGIN_DEG: f64 = 0.5;
pub const REQUEST_TIMEOUT_MS: u32 = 8000;

// cubic-bezier(0.12, 0.8, 0.22, 1)
pub const SPIN_EASING: [f64; 4] = [0.12, 0.8, 0.22, 1.0];

pub const SPIN_ENDPOINT: &str = "/api/spin";
pub const STATUS_ENDPOINT: &str = "/api/status";
pub const ADMIN_INVENTORY_ENDPOINT: &str = "/api/admin/inventory";
pub const ADMIN_RESET_ENDPOINT: &str = "/api/admin/reset";
pub const ADMIN_SECRET_HEADER: &str = "X-Admin-Secret";
pub const SESSION_COOKIE: &str = "spin_session";

pub const ALREADY_SPUN_MESSAGE: &str = "You Have Already Spun";
pub const BLOCKED_COLOR: &str = "#9CA3AF";
