use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{styles, Route};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::PAGE_INNER}>
                <h1 class={styles::TEXT_H1}>{"Nothing to spin here"}</h1>
                <Link<Route> to={Route::Home} classes={classes!(styles::LINK)}>{"Back to the wheel"}</Link<Route>>
            </div>
        </div>
    }
}
