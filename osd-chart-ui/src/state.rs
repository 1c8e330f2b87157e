//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The signals mirror the fields of
//! `osd_render::router::InteractionState`; render effects read exactly
//! the signals their view subscribes to.

use dioxus::prelude::*;
use osd_ctd::station::Station;
use osd_render::router::{HoverPayload, DEPTH_AXIS_DEFAULT, MAP_HEIGHT_DEFAULT};

/// Shared application state for the sounding dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The station index, loaded once on mount and read-only afterwards
    pub stations: Signal<Vec<Station>>,
    /// Whether the app is still loading the index
    pub loading: Signal<bool>,
    /// Fatal startup error (index load); no partial dashboard is shown
    pub error_msg: Signal<Option<String>>,
    /// Most recent map hover payload; None until the first hover
    pub hover: Signal<Option<HoverPayload>>,
    /// Map vertical size in pixels
    pub map_height: Signal<u32>,
    /// Dot color checkbox (false = blue, true = fuchsia)
    pub alternate_dots: Signal<bool>,
    /// Background checkbox (false = street tiles, true = USGS imagery)
    pub satellite: Signal<bool>,
    /// Depth axis upper bound in decibars
    pub depth_limit: Signal<f64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            stations: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            hover: Signal::new(None),
            map_height: Signal::new(MAP_HEIGHT_DEFAULT),
            alternate_dots: Signal::new(false),
            satellite: Signal::new(false),
            depth_limit: Signal::new(DEPTH_AXIS_DEFAULT),
        }
    }
}
