//! Map styling controls: background, dot color and vertical size.

use crate::state::AppState;
use dioxus::prelude::*;
use osd_render::router::{MAP_HEIGHT_MAX, MAP_HEIGHT_MIN, MAP_HEIGHT_STEP};

/// Checkboxes for the satellite background and dot color, plus the map
/// height slider. Writes straight into the AppState signals; the map
/// effect re-runs on each change.
#[component]
pub fn MapStyleControls() -> Element {
    let mut state = use_context::<AppState>();
    let satellite = (state.satellite)();
    let alternate_dots = (state.alternate_dots)();
    let map_height = (state.map_height)();

    let on_height_change = move |evt: Event<FormData>| {
        if let Ok(px) = evt.value().parse::<u32>() {
            state
                .map_height
                .set(px.clamp(MAP_HEIGHT_MIN, MAP_HEIGHT_MAX));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            p {
                style: "font-weight: bold; margin: 0 0 4px 0;",
                "Select point colour, map type & size"
            }
            label {
                style: "display: block;",
                input {
                    r#type: "checkbox",
                    checked: satellite,
                    onchange: move |evt: Event<FormData>| state.satellite.set(evt.checked()),
                }
                " Satellite (from USGS)"
            }
            label {
                style: "display: block;",
                input {
                    r#type: "checkbox",
                    checked: alternate_dots,
                    onchange: move |evt: Event<FormData>| state.alternate_dots.set(evt.checked()),
                }
                " change dot color"
            }
            label {
                style: "display: block; margin-top: 6px;",
                "map vertical size: {map_height} pixels"
                input {
                    r#type: "range",
                    min: "{MAP_HEIGHT_MIN}",
                    max: "{MAP_HEIGHT_MAX}",
                    step: "{MAP_HEIGHT_STEP}",
                    value: "{map_height}",
                    style: "width: 200px; display: block;",
                    onchange: on_height_change,
                }
            }
        }
    }
}
