use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;
use gloo_render::{request_animation_frame, AnimationFrame};
use spinwheel_shared::{Animator, SpinAnimation};
use yew::Callback;

/// Plays a spin on `requestAnimationFrame`, reporting every frame's angle.
pub struct FrameAnimator {
    on_frame: Callback<f64>,
}

impl FrameAnimator {
    pub fn new(on_frame: Callback<f64>) -> Self {
        Self { on_frame }
    }
}

struct FrameLoop {
    animation: SpinAnimation,
    on_frame: Callback<f64>,
    started_at: Cell<Option<f64>>,
    // Keeps the next frame alive; cleared once the transition is over.
    pending: RefCell<Option<AnimationFrame>>,
    done: RefCell<Option<oneshot::Sender<()>>>,
}

fn request_next(frame_loop: &Rc<FrameLoop>) {
    let next = Rc::clone(frame_loop);
    let handle = request_animation_frame(move |timestamp| tick(next, timestamp));
    *frame_loop.pending.borrow_mut() = Some(handle);
}

fn tick(frame_loop: Rc<FrameLoop>, timestamp: f64) {
    let started_at = match frame_loop.started_at.get() {
        Some(started_at) => started_at,
        None => {
            frame_loop.started_at.set(Some(timestamp));
            timestamp
        }
    };
    let elapsed = timestamp - started_at;

    frame_loop.on_frame.emit(frame_loop.animation.angle_at(elapsed));

    if frame_loop.animation.is_complete(elapsed) {
        frame_loop.pending.borrow_mut().take();
        if let Some(done) = frame_loop.done.borrow_mut().take() {
            let _ = done.send(());
        }
    } else {
        request_next(&frame_loop);
    }
}

impl Animator for FrameAnimator {
    async fn animate(&self, animation: &SpinAnimation) {
        let (done, finished) = oneshot::channel();
        let frame_loop = Rc::new(FrameLoop {
            animation: animation.clone(),
            on_frame: self.on_frame.clone(),
            started_at: Cell::new(None),
            pending: RefCell::new(None),
            done: RefCell::new(Some(done)),
        });

        request_next(&frame_loop);
        if finished.await.is_err() {
            log::warn!("spin animation ended without completing");
        }
    }
}
