use spinwheel_shared::constants::BLOCKED_COLOR;
use yew::prelude::*;

/// What the result card should show once a spin is over.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultView {
    Prize(String),
    NoPrize(String),
    Blocked(String),
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub result: Option<ResultView>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(result) = &props.result else {
        return html! {};
    };

    match result {
        ResultView::Prize(label) => html! {
            <div class="mt-8 mb-4 flex flex-col items-center justify-center">
                <div class={classes!(
                    "flex",
                    "flex-col",
                    "items-center",
                    "px-6",
                    "py-4",
                    "rounded-xl",
                    "bg-gradient-to-r",
                    "from-emerald-500",
                    "to-green-600",
                    "border-2",
                    "border-emerald-300",
                    "text-white",
                    "shadow-lg",
                    "animate-bounce"
                )}>
                    <span class="text-lg font-semibold">{"Congratulations! You Won!"}</span>
                    <span class="text-2xl font-bold mt-1">{label}</span>
                </div>
            </div>
        },
        ResultView::NoPrize(label) => html! {
            <div class="mt-8 mb-4 flex flex-col items-center justify-center">
                <div class="flex flex-col items-center px-6 py-4 rounded-xl bg-white dark:bg-gray-800 shadow-lg border-2 border-gray-200 dark:border-gray-700">
                    <span class="text-2xl font-bold text-gray-900 dark:text-white">{label}</span>
                    <span class="text-sm text-gray-600 dark:text-gray-400 mt-2">
                        {"Thanks for playing! Better luck next time"}
                    </span>
                </div>
            </div>
        },
        ResultView::Blocked(message) => html! {
            <div class="mt-8 mb-4 flex flex-col items-center justify-center">
                <div
                    class="px-6 py-4 rounded-xl text-white font-bold text-xl shadow-lg"
                    style={format!("background-color: {}", BLOCKED_COLOR)}
                >
                    {message}
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning {
        "Spinning..."
    } else {
        "Spin the Wheel"
    };

    let button_class = if props.is_spinning {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed"
    } else {
        "bg-gradient-to-r from-emerald-500 to-green-600 hover:from-emerald-600 hover:to-green-700 shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.is_spinning}
            class={classes!(
                "w-full",
                "px-8",
                "py-4",
                "rounded-full",
                "font-bold",
                "text-lg",
                "text-white",
                "transition-all",
                "duration-300",
                "focus:outline-none",
                "focus:ring-4",
                "focus:ring-emerald-300",
                button_class
            )}
        >
            <div class="flex items-center justify-center">
                <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </svg>
                <span>{button_text}</span>
            </div>
        </button>
    }
}

#[function_component(ExhaustedNotice)]
pub fn exhausted_notice() -> Html {
    html! {
        <div class="text-center px-6 py-4 rounded-xl bg-gray-100 dark:bg-gray-800">
            <p class="text-xl font-bold text-gray-900 dark:text-white">{"All prizes have been claimed!"}</p>
            <p class="text-sm text-gray-600 dark:text-gray-400 mt-2">{"Thank you for participating. Play is over."}</p>
        </div>
    }
}
