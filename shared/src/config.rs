use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::CubicBezier;
use crate::constants::{DEFAULT_TURNS, JITTER_MARGIN_DEG, REQUEST_TIMEOUT_MS, SPIN_DURATION_MS};

/// Tunables for one wheel instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Extra full revolutions per spin. Purely visual.
    pub turns: u32,
    pub spin_duration_ms: u32,
    /// Degrees kept clear of slice borders when jittering the landing point.
    pub jitter_margin_deg: f64,
    pub request_timeout_ms: u32,
    pub easing: CubicBezier,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            turns: DEFAULT_TURNS,
            spin_duration_ms: SPIN_DURATION_MS,
            jitter_margin_deg: JITTER_MARGIN_DEG,
            request_timeout_ms: REQUEST_TIMEOUT_MS,
            easing: CubicBezier::default(),
        }
    }
}

impl WheelConfig {
    /// Clamp values that would break the engine's guarantees.
    pub fn sanitized(mut self) -> Self {
        if self.turns < 1 {
            log::warn!("turns must be at least 1, got {}", self.turns);
            self.turns = 1;
        }
        if !self.jitter_margin_deg.is_finite() || self.jitter_margin_deg < 0.0 {
            log::warn!("invalid jitter margin {}, using 0", self.jitter_margin_deg);
            self.jitter_margin_deg = 0.0;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms as u64)
    }
}
