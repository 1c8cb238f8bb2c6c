use spinwheel_shared::wheel::StatusResponse;
use spinwheel_shared::SpinClient;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpSpinClient;
use crate::config::{get_api_base_url, wheel_config};

/// One status check on mount. Failures leave the status unknown.
#[hook]
pub fn use_inventory_status() -> (bool, Option<StatusResponse>) {
    let status = use_state(|| None::<StatusResponse>);
    let loading = use_state(|| true);

    {
        let status = status.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            loading.set(true);

            spawn_local(async move {
                match HttpSpinClient::new(get_api_base_url(), wheel_config().request_timeout()) {
                    Ok(client) => match client.fetch_status().await {
                        Ok(data) => status.set(Some(data)),
                        Err(e) => log::debug!("Status check failed: {}", e),
                    },
                    Err(e) => log::error!("Cannot build HTTP client for status check: {}", e),
                }
                loading.set(false);
            });

            || ()
        });
    }

    (*loading, *status)
}
