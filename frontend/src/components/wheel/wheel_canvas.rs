use std::f64::consts::PI;

use spinwheel_shared::geometry::{slice_center, slice_span};
use spinwheel_shared::Slice;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_SIZE: u32 = 320;
const BRAND_GREEN: &str = "#079964";
const RIM_COLOR: &str = "#e8fdf3";

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub slices: Vec<Slice>,
    /// Accumulated rotation in degrees, clockwise.
    pub rotation: f64,
}

fn to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

fn draw_wheel(context: &CanvasRenderingContext2d, size: f64, slices: &[Slice], rotation: f64) {
    let center = size / 2.0;
    let radius = center - 8.0;
    let count = slices.len();

    context.clear_rect(0.0, 0.0, size, size);

    // Rim
    context.begin_path();
    context.set_fill_style_str(RIM_COLOR);
    let _ = context.arc(center, center, radius + 4.0, 0.0, 2.0 * PI);
    context.fill();

    context.save();
    let _ = context.translate(center, center);
    let _ = context.rotate(to_rad(rotation));

    for (index, slice) in slices.iter().enumerate() {
        let (start, end) = slice_span(index, count);
        context.begin_path();
        context.set_fill_style_str(&slice.color);
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, to_rad(start), to_rad(end));
        context.close_path();
        context.fill();
    }

    context.set_fill_style_str("#ffffff");
    context.set_font("600 11px system-ui, sans-serif");
    context.set_text_align("center");
    context.set_text_baseline("middle");
    for (index, slice) in slices.iter().enumerate() {
        context.save();
        let _ = context.rotate(to_rad(slice_center(index, count)));
        let _ = context.translate(radius * 0.6, 0.0);
        let _ = context.fill_text(&slice.label, 0.0, 0.0);
        context.restore();
    }

    context.restore();

    // Center cap does not turn with the wheel
    context.begin_path();
    context.set_fill_style_str(BRAND_GREEN);
    let _ = context.arc(center, center, 25.0, 0.0, 2.0 * PI);
    context.fill();
    context.set_fill_style_str("#ffffff");
    let _ = context.fill_text("Spin", center, center + 1.0);

    // Pointer at the top, tip pointing into the wheel
    context.begin_path();
    context.set_fill_style_str(BRAND_GREEN);
    context.move_to(center - 10.0, 0.0);
    context.line_to(center + 10.0, 0.0);
    context.line_to(center, 18.0);
    context.close_path();
    context.fill();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.slices.clone(), props.rotation),
            move |(slices, rotation)| {
                let context = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| canvas.get_context("2d").ok().flatten())
                    .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok());

                match context {
                    Some(context) => draw_wheel(&context, CANVAS_SIZE as f64, slices, *rotation),
                    None => log::warn!("wheel canvas has no 2d context"),
                }
                || ()
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={CANVAS_SIZE.to_string()}
            height={CANVAS_SIZE.to_string()}
            class="rounded-full shadow-xl bg-white"
            role="img"
            aria-label="Prize wheel"
        />
    }
}
