//! Drives one spin end to end on a single-threaded executor.
//!
//! The machine lives in a `RefCell` so the host UI can read it between
//! suspension points. No borrow is held across an `.await`.

use std::cell::RefCell;

use crate::animation::SpinAnimation;
use crate::spin_client::SpinClient;
use crate::state_machine::{Resolution, SpinAttempt, SpinEnd, SpinMachine};

/// Runs one transition and resolves when it has finished.
///
/// There is no cancellation: once started the transition always completes.
#[allow(async_fn_in_trait)]
pub trait Animator {
    async fn animate(&self, animation: &SpinAnimation);
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinReport {
    /// Another spin was in flight; nothing happened.
    Ignored,
    /// Inventory is exhausted; no request was made.
    Rejected,
    Blocked(String),
    Settled(SpinEnd),
}

pub async fn run_spin<C, A>(machine: &RefCell<SpinMachine>, client: &C, animator: &A) -> SpinReport
where
    C: SpinClient,
    A: Animator,
{
    let attempt = machine.borrow_mut().begin_spin();
    match attempt {
        SpinAttempt::Started => finish_spin(machine, client, animator).await,
        SpinAttempt::Busy => SpinReport::Ignored,
        SpinAttempt::Exhausted => SpinReport::Rejected,
    }
}

/// Continue a spin that `begin_spin` has already moved to `Requesting`.
pub async fn finish_spin<C, A>(
    machine: &RefCell<SpinMachine>,
    client: &C,
    animator: &A,
) -> SpinReport
where
    C: SpinClient,
    A: Animator,
{
    let response = client.request_spin().await;

    let resolution = machine.borrow_mut().resolve(response);
    let animation = match resolution {
        Resolution::Animate(animation) => animation,
        Resolution::Blocked(message) => return SpinReport::Blocked(message),
        Resolution::Stale => return SpinReport::Ignored,
    };

    animator.animate(&animation).await;

    let end = machine.borrow_mut().complete_animation();
    match end {
        Some(end) => SpinReport::Settled(end),
        None => SpinReport::Ignored,
    }
}
