mod animator;
mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use spinwheel_shared::{
    default_slices, finish_spin, ExhaustionFlag, Slice, SpinAttempt, SpinMachine, SpinReport,
    WheelError,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpSpinClient;
use crate::config::{get_api_base_url, wheel_config};
use crate::hooks::use_inventory_status;
use crate::styles;

pub use animator::FrameAnimator;
use wheel_canvas::WheelCanvas;
use wheel_utils::{ExhaustedNotice, ResultDisplay, ResultView, SpinButton};

#[derive(Properties, PartialEq)]
pub struct WheelProps {
    #[prop_or_else(default_slices)]
    pub slices: Vec<Slice>,
    /// Fired once per settled spin with the landed slice.
    #[prop_or_default]
    pub on_spin_end: Option<Callback<(usize, Slice)>>,
    /// Share to let several wheels stop together when stock runs out.
    #[prop_or_default]
    pub exhaustion: Option<ExhaustionFlag>,
}

type SharedMachine = Rc<RefCell<SpinMachine>>;

fn build_machine(props: &WheelProps) -> Result<SharedMachine, WheelError> {
    let machine = SpinMachine::new(props.slices.clone(), wheel_config())?;
    let machine = match &props.exhaustion {
        Some(flag) => machine.with_exhaustion(flag.clone()),
        None => machine,
    };
    Ok(Rc::new(RefCell::new(machine)))
}

#[function_component(Wheel)]
pub fn wheel(props: &WheelProps) -> Html {
    let machine = use_state(|| {
        let built = build_machine(props);
        if let Err(e) = &built {
            log::error!("Cannot build wheel: {}", e);
        }
        built
    });
    let rotation = use_state(|| 0.0_f64);
    let result = use_state(|| None::<ResultView>);
    let trigger = use_force_update();
    let (_, status) = use_inventory_status();

    // Apply the mount-time status check once it lands
    {
        let machine = machine.clone();
        let trigger = trigger.clone();
        use_effect_with(status, move |status| {
            if let (Some(status), Ok(machine)) = (status, &*machine) {
                machine.borrow().observe_status(*status);
                trigger.force_update();
            }
            || ()
        });
    }

    let start_spin = {
        let machine = machine.clone();
        let rotation = rotation.setter();
        let result = result.clone();
        let trigger = trigger.clone();
        let on_spin_end = props.on_spin_end.clone();

        Callback::from(move |_: MouseEvent| {
            let Ok(machine) = &*machine else {
                return;
            };
            let machine = Rc::clone(machine);

            let timeout = machine.borrow().config().request_timeout();
            let client = match HttpSpinClient::new(get_api_base_url(), timeout) {
                Ok(client) => client,
                Err(e) => {
                    log::error!("Cannot build HTTP client, spin not started: {}", e);
                    return;
                }
            };

            // Claim the spin before anything async so a double click is a no-op
            let attempt = machine.borrow_mut().begin_spin();
            if attempt != SpinAttempt::Started {
                log::debug!("Spin not started: {:?}", attempt);
                trigger.force_update();
                return;
            }
            result.set(None);
            trigger.force_update();

            let rotation = rotation.clone();
            let result = result.clone();
            let trigger = trigger.clone();
            let on_spin_end = on_spin_end.clone();

            spawn_local(async move {
                let animator = FrameAnimator::new(Callback::from(move |angle| rotation.set(angle)));

                match finish_spin(&machine, &client, &animator).await {
                    SpinReport::Settled(end) => {
                        let view = if end.is_prize {
                            ResultView::Prize(end.slice.label.clone())
                        } else {
                            ResultView::NoPrize(end.slice.label.clone())
                        };
                        result.set(Some(view));
                        if let Some(on_spin_end) = &on_spin_end {
                            on_spin_end.emit((end.index, end.slice));
                        }
                    }
                    SpinReport::Blocked(message) => result.set(Some(ResultView::Blocked(message))),
                    SpinReport::Ignored | SpinReport::Rejected => {}
                }
                trigger.force_update();
            });
        })
    };

    let Ok(current) = &*machine else {
        return html! {
            <div class={styles::CARD_ERROR}>{"This wheel has no slices to spin."}</div>
        };
    };
    let (slices, is_spinning, is_exhausted) = {
        let current = current.borrow();
        (current.slices().to_vec(), current.is_busy(), current.is_exhausted())
    };

    html! {
        <div class="flex flex-col items-center gap-6">
            <WheelCanvas slices={slices} rotation={*rotation} />
            {
                match panel(is_exhausted, is_spinning) {
                    Panel::Exhausted => html! { <ExhaustedNotice /> },
                    Panel::Play => html! {
                        <>
                            <div class="w-64">
                                <SpinButton is_spinning={is_spinning} onclick={start_spin} />
                            </div>
                            <ResultDisplay result={(*result).clone()} />
                        </>
                    },
                }
            }
        </div>
    }
}

/// What sits under the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    /// Button and last result.
    Play,
    /// Stock is gone; the notice replaces both button and result.
    Exhausted,
}

// A spin that drained the stock still finishes before the notice shows.
fn panel(is_exhausted: bool, is_spinning: bool) -> Panel {
    if is_exhausted && !is_spinning {
        Panel::Exhausted
    } else {
        Panel::Play
    }
}
