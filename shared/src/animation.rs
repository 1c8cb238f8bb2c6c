//! Rotation planning and easing for a single spin.

use serde::{Deserialize, Serialize};

use crate::config::WheelConfig;
use crate::constants::{FULL_ROTATION, SPIN_EASING};
use crate::geometry::normalize;

const BISECTION_STEPS: u32 = 48;

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Default for CubicBezier {
    fn default() -> Self {
        let [x1, y1, x2, y2] = SPIN_EASING;
        Self { x1, y1, x2, y2 }
    }
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    /// Eased value for `progress` in `[0, 1]`.
    ///
    /// Control points are clamped into the unit square, which keeps the curve
    /// monotone non-decreasing: the wheel never turns backward.
    pub fn apply(&self, progress: f64) -> f64 {
        if progress.is_nan() || progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }

        let x1 = self.x1.clamp(0.0, 1.0);
        let x2 = self.x2.clamp(0.0, 1.0);
        let y1 = self.y1.clamp(0.0, 1.0);
        let y2 = self.y2.clamp(0.0, 1.0);

        // x(t) is monotone on [0, 1], so bisection finds the curve parameter.
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        for _ in 0..BISECTION_STEPS {
            let mid = (lo + hi) / 2.0;
            if Self::sample(x1, x2, mid) < progress {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self::sample(y1, y2, (lo + hi) / 2.0).clamp(0.0, 1.0)
    }
}

/// One finite, forward-only rotation transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
    pub easing: CubicBezier,
}

impl SpinAnimation {
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    pub fn angle_at(&self, elapsed_ms: f64) -> f64 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// Where the wheel comes to rest, reduced into `[0, 360)`.
    pub fn landing_angle(&self) -> f64 {
        normalize(self.to)
    }
}

/// Owns the accumulated wheel rotation and plans transitions from it.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    rotation: f64,
    turns: u32,
    duration_ms: u32,
    easing: CubicBezier,
}

impl AnimationDriver {
    pub fn new(config: &WheelConfig) -> Self {
        Self {
            rotation: 0.0,
            turns: config.turns.max(1),
            duration_ms: config.spin_duration_ms,
            easing: config.easing,
        }
    }

    /// Total accumulated rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Plan a transition that comes to rest at `target_angle` (mod 360).
    ///
    /// The full turns are counted from the current revolution, so the first
    /// spin ends at `turns * 360 + target` and later spins keep moving forward.
    pub fn plan(&self, target_angle: f64) -> SpinAnimation {
        let completed_turns = self.rotation - normalize(self.rotation);
        let to = completed_turns + self.turns as f64 * FULL_ROTATION + normalize(target_angle);
        SpinAnimation {
            from: self.rotation,
            to,
            duration_ms: self.duration_ms,
            easing: self.easing,
        }
    }

    /// Record that `animation` ran to completion.
    pub fn finish(&mut self, animation: &SpinAnimation) {
        if animation.to >= self.rotation {
            self.rotation = animation.to;
        } else {
            log::warn!(
                "ignoring backward transition {} -> {}",
                self.rotation,
                animation.to
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> AnimationDriver {
        AnimationDriver::new(&WheelConfig::default())
    }

    #[test]
    fn test_easing_endpoints() {
        let easing = CubicBezier::default();
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert_eq!(easing.apply(-2.0), 0.0);
        assert_eq!(easing.apply(7.0), 1.0);
    }

    #[test]
    fn test_easing_is_monotone() {
        let easing = CubicBezier::default();
        let mut previous = 0.0;
        for step in 0..=1000 {
            let value = easing.apply(step as f64 / 1000.0);
            assert!(value >= previous, "step {step}: {value} < {previous}");
            previous = value;
        }
    }

    #[test]
    fn test_linear_curve() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for step in 1..10 {
            let progress = step as f64 / 10.0;
            assert!((linear.apply(progress) - progress).abs() < 1e-6);
        }
    }

    #[test]
    fn test_spin_easing_decelerates() {
        let easing = CubicBezier::default();
        // Fast start: well past halfway after a quarter of the time.
        assert!(easing.apply(0.25) > 0.5);
    }

    #[test]
    fn test_first_spin_matches_turn_formula() {
        let animation = driver().plan(60.0);
        assert_eq!(animation.from, 0.0);
        assert_eq!(animation.to, 5.0 * 360.0 + 60.0);
        assert_eq!(animation.duration_ms, 3000);
    }

    #[test]
    fn test_plan_reduces_target() {
        let animation = driver().plan(-30.0);
        assert_eq!(animation.to, 1800.0 + 330.0);
        assert_eq!(animation.landing_angle(), 330.0);
    }

    #[test]
    fn test_next_spin_continues_forward() {
        let mut driver = driver();
        let first = driver.plan(350.0);
        driver.finish(&first);

        let second = driver.plan(10.0);
        assert_eq!(second.from, first.to);
        assert!(second.to > second.from);
        assert_eq!(second.landing_angle(), 10.0);
        assert!(second.to - second.from > 4.0 * 360.0);
    }

    #[test]
    fn test_angle_at_bounds() {
        let animation = driver().plan(100.0);
        assert_eq!(animation.angle_at(0.0), animation.from);
        assert_eq!(animation.angle_at(3000.0), animation.to);
        assert_eq!(animation.angle_at(9000.0), animation.to);
        assert!(!animation.is_complete(2999.0));
        assert!(animation.is_complete(3000.0));
    }

    #[test]
    fn test_transition_never_runs_backward() {
        let mut driver = driver();
        for target in [300.0, 10.0, 200.0, 199.0] {
            let animation = driver.plan(target);
            let mut previous = animation.from;
            for elapsed in (0..=3000).step_by(16) {
                let angle = animation.angle_at(elapsed as f64);
                assert!(angle >= previous);
                previous = angle;
            }
            driver.finish(&animation);
        }
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let config = WheelConfig {
            spin_duration_ms: 0,
            ..WheelConfig::default()
        };
        let animation = AnimationDriver::new(&config).plan(45.0);
        assert!(animation.is_complete(0.0));
        assert_eq!(animation.angle_at(0.0), animation.to);
    }

    #[test]
    fn test_finish_ignores_backward_transition() {
        let mut driver = driver();
        let first = driver.plan(90.0);
        driver.finish(&first);
        let stale = SpinAnimation { to: 10.0, ..first.clone() };
        driver.finish(&stale);
        assert_eq!(driver.rotation(), first.to);
    }
}
