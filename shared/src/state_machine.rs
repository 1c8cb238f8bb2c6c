//! Client-side lifecycle of a spin: idle -> requesting -> animating -> settled/blocked.

use std::cell::Cell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::animation::{AnimationDriver, SpinAnimation};
use crate::config::WheelConfig;
use crate::geometry::angle_for_index;
use crate::jitter::jitter;
use crate::spin_client::SpinRequestError;
use crate::wheel::{Slice, SpinOutcome, StatusResponse};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WheelError {
    #[error("a wheel needs at least one slice")]
    NoSlices,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinState {
    Idle,
    Requesting,
    Animating(SpinOutcome),
    Settled(SpinOutcome),
    Blocked(String),
}

/// "No prizes left" marker for a play session.
///
/// Cloning shares the flag, so wheels that must agree on exhaustion are
/// handed clones of the same handle. Once marked it stays marked.
#[derive(Debug, Clone, Default)]
pub struct ExhaustionFlag(Rc<Cell<bool>>);

impl ExhaustionFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    pub fn mark(&self) {
        self.0.set(true);
    }
}

impl PartialEq for ExhaustionFlag {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinAttempt {
    Started,
    /// A spin is already requesting or animating.
    Busy,
    Exhausted,
}

/// What the host sees once a spin comes to rest.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinEnd {
    pub index: usize,
    pub slice: Slice,
    pub is_prize: bool,
    /// The authority was unreachable and the outcome was picked locally.
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Animate(SpinAnimation),
    Blocked(String),
    /// The machine was not waiting for a response.
    Stale,
}

pub struct SpinMachine {
    slices: Vec<Slice>,
    config: WheelConfig,
    state: SpinState,
    driver: AnimationDriver,
    exhausted: ExhaustionFlag,
    in_flight: Option<SpinAnimation>,
    fallback: bool,
    rng: SmallRng,
}

impl SpinMachine {
    pub fn new(slices: Vec<Slice>, config: WheelConfig) -> Result<Self, WheelError> {
        if slices.is_empty() {
            return Err(WheelError::NoSlices);
        }
        let config = config.sanitized();
        Ok(Self {
            driver: AnimationDriver::new(&config),
            slices,
            config,
            state: SpinState::Idle,
            exhausted: ExhaustionFlag::new(),
            in_flight: None,
            fallback: false,
            rng: SmallRng::from_entropy(),
        })
    }

    /// Share exhaustion status with other wheels.
    pub fn with_exhaustion(mut self, flag: ExhaustionFlag) -> Self {
        self.exhausted = flag;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn rotation(&self) -> f64 {
        self.driver.rotation()
    }

    pub fn exhaustion(&self) -> &ExhaustionFlag {
        &self.exhausted
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted.is_set()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, SpinState::Requesting | SpinState::Animating(_))
    }

    /// Apply a status check. Only ever turns exhaustion on.
    pub fn observe_status(&self, status: StatusResponse) {
        if status.all_prizes_gone && !self.exhausted.is_set() {
            log::info!("status check reports all prizes gone");
            self.exhausted.mark();
        }
    }

    pub fn begin_spin(&mut self) -> SpinAttempt {
        if self.exhausted.is_set() {
            return SpinAttempt::Exhausted;
        }
        if self.is_busy() {
            log::debug!("spin ignored while {:?}", self.state);
            return SpinAttempt::Busy;
        }
        self.transition(SpinState::Requesting);
        SpinAttempt::Started
    }

    /// Feed the authority's answer to a pending request.
    pub fn resolve(&mut self, response: Result<SpinOutcome, SpinRequestError>) -> Resolution {
        if self.state != SpinState::Requesting {
            log::warn!("dropping spin response received while {:?}", self.state);
            return Resolution::Stale;
        }

        let (outcome, fallback) = match response {
            Ok(outcome) if outcome.slice_index < self.slices.len() => (outcome, false),
            Ok(outcome) => {
                log::warn!(
                    "authority returned slice {} for a {}-slice wheel",
                    outcome.slice_index,
                    self.slices.len()
                );
                (self.fallback_outcome(), true)
            }
            Err(SpinRequestError::AlreadySpun(message)) => {
                self.transition(SpinState::Blocked(message.clone()));
                return Resolution::Blocked(message);
            }
            Err(SpinRequestError::Unavailable) => {
                log::warn!("spin authority unavailable, picking a local outcome");
                (self.fallback_outcome(), true)
            }
        };

        if outcome.all_prizes_gone {
            self.exhausted.mark();
        }

        let count = self.slices.len();
        let target = angle_for_index(outcome.slice_index, count)
            + jitter(&mut self.rng, count, self.config.jitter_margin_deg);
        let animation = self.driver.plan(target);

        self.fallback = fallback;
        self.in_flight = Some(animation.clone());
        self.transition(SpinState::Animating(outcome));
        Resolution::Animate(animation)
    }

    /// Mark the running transition as finished and publish the result.
    pub fn complete_animation(&mut self) -> Option<SpinEnd> {
        let outcome = match &self.state {
            SpinState::Animating(outcome) => outcome.clone(),
            other => {
                log::warn!("animation completed while {:?}", other);
                return None;
            }
        };

        if let Some(animation) = self.in_flight.take() {
            self.driver.finish(&animation);
        }

        let end = SpinEnd {
            index: outcome.slice_index,
            slice: self.slices[outcome.slice_index].clone(),
            is_prize: outcome.is_prize,
            fallback: self.fallback,
        };
        self.transition(SpinState::Settled(outcome));
        Some(end)
    }

    fn fallback_outcome(&mut self) -> SpinOutcome {
        let index = self.rng.gen_range(0..self.slices.len());
        SpinOutcome {
            slice_index: index,
            label: self.slices[index].label.clone(),
            is_prize: false,
            all_prizes_gone: self.exhausted.is_set(),
        }
    }

    fn transition(&mut self, next: SpinState) {
        log::debug!("spin state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
