//! Spin-resolution engine for the prize wheel.
//!
//! Everything here is platform independent: the browser front end supplies a
//! [`SpinClient`] and an [`Animator`], the engine decides where the wheel
//! stops and which state the play session is in.

pub mod animation;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod jitter;
pub mod lifecycle;
pub mod spin_client;
pub mod state_machine;
pub mod wheel;

pub use animation::{AnimationDriver, CubicBezier, SpinAnimation};
pub use config::WheelConfig;
pub use lifecycle::{finish_spin, run_spin, Animator, SpinReport};
pub use spin_client::{classify_spin_response, classify_status_response, SpinClient, SpinRequestError};
pub use state_machine::{
    ExhaustionFlag, Resolution, SpinAttempt, SpinEnd, SpinMachine, SpinState, WheelError,
};
pub use wheel::{default_slices, Slice, SpinOutcome};
