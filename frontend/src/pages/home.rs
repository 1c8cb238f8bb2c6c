use spinwheel_shared::Slice;
use yew::prelude::*;

use crate::components::Wheel;
use crate::styles;

#[function_component(Home)]
pub fn home() -> Html {
    let on_spin_end = Callback::from(|(index, slice): (usize, Slice)| {
        log::info!("Wheel stopped on slice {} ({})", index, slice.label);
    });

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::PAGE_INNER}>
                <h1 class={styles::TEXT_H1}>{"Spin the Wheel"}</h1>
                <p class={styles::TEXT_BODY}>{"One spin per visitor. Good luck!"}</p>
                <div class={styles::CARD}>
                    <Wheel on_spin_end={on_spin_end} />
                </div>
            </div>
        </div>
    }
}
