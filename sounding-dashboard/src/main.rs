//! CTD sounding explorer for cruise 33RR20180918 (GEOTRACES GP15).
//!
//! An interactive map shows the cruise's sounding stations; hovering a
//! station dot loads that station's depth profile and redraws the
//! temperature, salinity and oxygen charts.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/station-index.csv` into `OUT_DIR` and
//!    `include_str!` embeds it; the index is parsed once on mount into
//!    read-only state. An index failure is fatal: the app shows a single
//!    error view, never a partial dashboard.
//! 2. The map JS reports hovers through `window.__osdHover`, which feeds
//!    the hover signal.
//! 3. Each chart effect reads exactly the signals its view subscribes to
//!    (per `osd_render::dispatch`), fetches the station's ct1 file,
//!    re-parses it and renders through the JS bridge. Profiles are never
//!    cached; a fetch or parse failure marks only its own chart.

use dioxus::prelude::*;
use osd_chart_ui::components::{
    ChartContainer, ChartHeader, DepthAxisSlider, ErrorDisplay, LoadingSpinner, MapStyleControls,
};
use osd_chart_ui::state::AppState;
use osd_chart_ui::{fetch, js_bridge};
use osd_ctd::profile::{parse_profile, FooterPolicy};
use osd_ctd::station::parse_station_index;
use osd_render::dispatch::{self, InputId, ViewId};
use osd_render::map::{render_map, MAP_TITLE};
use osd_render::profile_chart::{render_oxygen, render_salinity, render_temperature};
use osd_render::router::{
    resolve_active_station, resolve_controls, HoverPayload, InteractionState,
};

/// Curated station index, one row per sounding location.
const STATION_INDEX_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/station-index.csv"));

/// Chart container DOM element ids the JS layer renders into.
const MAP_ID: &str = "sounding-map";
const TEMPERATURE_CHART_ID: &str = "temperature-chart";
const SALINITY_CHART_ID: &str = "salinity-chart";
const OXYGEN_CHART_ID: &str = "oxygen-chart";

/// The cruise corpus is the footer-trimming ct1 variant: every file ends
/// in an END_DATA row that is not a sample.
const FOOTER_POLICY: FooterPolicy = FooterPolicy::Trim;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sounding-dashboard-root"))
        .launch(App);
}

/// Read only the signals the view subscribes to (per the dispatch table);
/// everything else stays at its default so the calling effect does not
/// re-run on unrelated inputs.
fn read_subscribed(state: &AppState, view: ViewId) -> InteractionState {
    let mut interaction = InteractionState::default();
    for input in dispatch::subscriptions(view) {
        match input {
            InputId::Hover => interaction.hover = (state.hover)(),
            InputId::MapHeight => interaction.map_height = (state.map_height)(),
            InputId::DotColor => interaction.alternate_dots = (state.alternate_dots)(),
            InputId::Basemap => interaction.satellite = (state.satellite)(),
            InputId::DepthLimit => interaction.depth_limit = (state.depth_limit)(),
        }
    }
    interaction
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: parse the embedded index once on mount ───
    use_effect(move || {
        match parse_station_index(STATION_INDEX_CSV) {
            Ok(stations) => {
                state.stations.set(stations);
                state.loading.set(false);
            }
            Err(e) => {
                log::error!("Failed to load station index: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load station index: {}", e)));
                state.loading.set(false);
                return;
            }
        }

        // Initialize the Leaflet/D3 chart scripts
        js_bridge::init_charts();

        // Map hovers arrive here as JSON payloads
        js_bridge::set_hover_handler(move |payload_json| {
            match serde_json::from_str::<HoverPayload>(&payload_json) {
                Ok(payload) => state.hover.set(Some(payload)),
                Err(e) => log::warn!("Ignoring malformed hover payload: {}", e),
            }
        });
    });

    // ─── Effect 2: render the map on its subscribed inputs only ───
    // Hovering must not redraw the map under the cursor, so the hover
    // signal is deliberately not read here.
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let interaction = read_subscribed(&state, ViewId::Map);
        let stations = state.stations.read().clone();
        let spec = render_map(&stations, &resolve_controls(&interaction));
        js_bridge::render_station_map(MAP_ID, &spec.to_json());
    });

    // ─── Render ───
    rsx! {
        div {
            style: "width: 1000px; font-family: system-ui, -apple-system, sans-serif;",

            Intro {}

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                // control panel + depth axis, side by side
                div {
                    style: "width: 38%; display: inline-block; vertical-align: top;",
                    MapStyleControls {}
                }
                div {
                    style: "width: 60%; display: inline-block; vertical-align: top; text-align: center;",
                    ChartHeader {
                        title: "Measured values versus depth.".to_string(),
                        unit_description: "Mouse-over a station on the map to load its profile.".to_string(),
                    }
                    DepthAxisSlider {}
                }

                // the map with station dots
                div {
                    style: "width: 38%; display: inline-block; vertical-align: top; padding: 0 20px 0 0;",
                    h4 {
                        style: "margin: 0 0 4px 0; font-size: 14px;",
                        "{MAP_TITLE}"
                    }
                    ChartContainer {
                        id: MAP_ID.to_string(),
                        loading: false,
                        min_height: 300,
                    }
                }

                // three side-by-side depth profiles
                ProfileChart { view: ViewId::Temperature, container_id: TEMPERATURE_CHART_ID }
                ProfileChart { view: ViewId::Salinity, container_id: SALINITY_CHART_ID }
                ProfileChart { view: ViewId::Oxygen, container_id: OXYGEN_CHART_ID }

                Attribution {}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ProfileChartProps {
    view: ViewId,
    container_id: &'static str,
}

/// One depth-profile chart. Owns its error display: a failed fetch or
/// parse darkens this chart only, and the next hover retries naturally.
#[component]
fn ProfileChart(props: ProfileChartProps) -> Element {
    let state = use_context::<AppState>();
    let mut error = use_signal(|| None::<String>);
    let view = props.view;
    let container_id = props.container_id;

    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let interaction = read_subscribed(&state, view);
        let station = resolve_active_station(&interaction);
        let controls = resolve_controls(&interaction);

        // Fetch and re-parse the profile for every event; no cache is
        // shared with sibling charts.
        spawn(async move {
            let text = match fetch::fetch_text(&station.source_file).await {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("{}", e);
                    error.set(Some(e));
                    js_bridge::destroy_chart(container_id);
                    return;
                }
            };
            match parse_profile(&text, FOOTER_POLICY) {
                Ok(profile) => {
                    if !profile.is_pressure_ordered() {
                        log::warn!("{}: samples are not pressure-ordered", station.source_file);
                    }
                    let spec = match view {
                        ViewId::Temperature => render_temperature(&profile, &controls, &station),
                        ViewId::Salinity => render_salinity(&profile, &controls),
                        ViewId::Oxygen => render_oxygen(&profile, &controls),
                        ViewId::Map => return,
                    };
                    error.set(None);
                    js_bridge::render_profile_chart(container_id, &spec.to_json());
                }
                Err(e) => {
                    log::warn!("Profile parse failed for {}: {}", station.source_file, e);
                    error.set(Some(format!("{}: {}", station.source_file, e)));
                    js_bridge::destroy_chart(container_id);
                }
            }
        });
    });

    rsx! {
        div {
            style: "width: 20%; display: inline-block; vertical-align: top;",
            if let Some(err) = error() {
                ErrorDisplay { message: err }
            }
            ChartContainer {
                id: container_id.to_string(),
                loading: false,
                min_height: 420,
            }
        }
    }
}

/// Title, purpose and instructions, carried from the reference app.
#[component]
fn Intro() -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h3 { "CTD data from Cruise 33RR20180918" }
            p {
                style: "font-size: 13px;",
                "Data for this demonstration app were obtained from the GEOTRACES cruise GP15. "
                "An interactive map shows measurement stations along longitude -152E, from Alaska to the equator."
            }
            ul {
                style: "font-size: 13px; margin: 4px 0;",
                li { "Mouse-over a station (dots) will plot the corresponding temperature, salinity & oxygen profiles." }
                li { "Mouse wheel zooms within the map." }
                li { "Map background and station dot color can be adjusted with checkboxes." }
                li { "The map's slider changes vertical size of the map." }
                li { "Depth scale can be adjusted for all three plots together using the selector above the depth profiles." }
            }
            hr { style: "border: none; border-top: 1px solid #e0e0e0;" }
        }
    }
}

/// Data source attribution, carried from the reference app.
#[component]
fn Attribution() -> Element {
    rsx! {
        div {
            style: "margin-top: 12px; padding: 8px 12px; background: #F5F5F5; border-radius: 4px; font-size: 12px; color: #616161; border: 1px solid #E0E0E0;",
            "Data source: Cutter, G. 2018. CTD data from Cruise 33RR20180918, exchange version. "
            "Accessed from CCHDO, https://cchdo.ucsd.edu/cruise/33RR20180918."
        }
    }
}
