//! Depth axis selector shared by all profile charts.

use crate::state::AppState;
use dioxus::prelude::*;
use osd_render::router::DEPTH_AXIS_STOPS;

/// Dropdown over the discrete depth-axis stops. The stops are uneven
/// (200 to 3500 DBars), so a select is used rather than a range input.
#[component]
pub fn DepthAxisSlider() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.depth_limit)();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(depth) = evt.value().parse::<f64>() {
            if DEPTH_AXIS_STOPS.contains(&depth) {
                state.depth_limit.set(depth);
            }
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Depth axis, DBars: "
                select {
                    onchange: on_change,
                    for stop in DEPTH_AXIS_STOPS.iter() {
                        option {
                            value: "{stop}",
                            selected: (*stop - current).abs() < f64::EPSILON,
                            "{stop}"
                        }
                    }
                }
            }
        }
    }
}
