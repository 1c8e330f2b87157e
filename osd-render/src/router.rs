//! Interaction routing: from the framework-held interaction state to the
//! active station and the current control values.
//!
//! Both entry points are pure functions of their input; no state is
//! retained between calls beyond what the hosting UI supplies.

use serde::{Deserialize, Serialize};

/// Backing file of the station shown before any hover has happened.
pub const DEFAULT_STATION_FILE: &str = "data/33RR20180918_00001_00002_ct1.csv";
/// Coordinates of the default station, used for the initial annotation.
pub const DEFAULT_STATION_LAT: f64 = 56.05826;
pub const DEFAULT_STATION_LON: f64 = -156.9622;

/// Map height slider, pixels.
pub const MAP_HEIGHT_MIN: u32 = 300;
pub const MAP_HEIGHT_MAX: u32 = 500;
pub const MAP_HEIGHT_STEP: u32 = 50;
pub const MAP_HEIGHT_DEFAULT: u32 = 400;

/// Depth axis slider stops, decibars.
pub const DEPTH_AXIS_STOPS: [f64; 6] = [200.0, 500.0, 1000.0, 1500.0, 2500.0, 3500.0];
pub const DEPTH_AXIS_DEFAULT: f64 = 2500.0;

/// What the map delivers for the point under the cursor. This shape is
/// the contract between the map renderer and the router: every map point
/// carries its backing file so the payload can be built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverPayload {
    pub source_file: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// The station whose profile the charts should show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRef {
    pub source_file: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Station dot color: binary choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DotColor {
    /// Default blue dots
    Primary,
    /// High-visibility alternative for the satellite background
    Alternate,
}

impl DotColor {
    pub fn css(&self) -> &'static str {
        match self {
            DotColor::Primary => "blue",
            DotColor::Alternate => "fuchsia",
        }
    }
}

/// Map background: binary choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Basemap {
    /// Plain, easy-to-read street tiles
    Street,
    /// USGS imagery raster
    Satellite,
}

/// Everything the hosting UI holds between events: the most recent hover
/// payload (if any) and the raw control widget values.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    pub hover: Option<HoverPayload>,
    pub map_height: u32,
    pub alternate_dots: bool,
    pub satellite: bool,
    pub depth_limit: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            hover: None,
            map_height: MAP_HEIGHT_DEFAULT,
            alternate_dots: false,
            satellite: false,
            depth_limit: DEPTH_AXIS_DEFAULT,
        }
    }
}

/// Normalized control values consumed by the renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    pub map_height: u32,
    pub dot_color: DotColor,
    pub basemap: Basemap,
    pub depth_limit: f64,
}

impl Default for ControlState {
    fn default() -> Self {
        resolve_controls(&InteractionState::default())
    }
}

/// Which station's data to load: the most recent hover payload, or the
/// documented default station before any interaction. Absence of a hover
/// is a normal code path, not an error.
pub fn resolve_active_station(state: &InteractionState) -> StationRef {
    match &state.hover {
        Some(hover) => StationRef {
            source_file: hover.source_file.clone(),
            latitude: hover.latitude,
            longitude: hover.longitude,
        },
        None => StationRef {
            source_file: DEFAULT_STATION_FILE.to_string(),
            latitude: DEFAULT_STATION_LAT,
            longitude: DEFAULT_STATION_LON,
        },
    }
}

/// Passthrough extraction of the control values that affect rendering.
pub fn resolve_controls(state: &InteractionState) -> ControlState {
    ControlState {
        map_height: state.map_height,
        dot_color: if state.alternate_dots {
            DotColor::Alternate
        } else {
            DotColor::Primary
        },
        basemap: if state.satellite {
            Basemap::Satellite
        } else {
            Basemap::Street
        },
        depth_limit: state.depth_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hover_resolves_default_station() {
        let state = InteractionState::default();
        let active = resolve_active_station(&state);
        assert_eq!(active.source_file, DEFAULT_STATION_FILE);
        assert!((active.latitude - 56.05826).abs() < f64::EPSILON);
        assert!((active.longitude - (-156.9622)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hover_round_trip_identity() {
        // A hover carrying a station's file reference resolves to that
        // same reference.
        let state = InteractionState {
            hover: Some(HoverPayload {
                source_file: "data/33RR20180918_00026_00003_ct1.csv".to_string(),
                latitude: 47.0002,
                longitude: -151.9998,
            }),
            ..InteractionState::default()
        };
        let active = resolve_active_station(&state);
        assert_eq!(active.source_file, "data/33RR20180918_00026_00003_ct1.csv");
        assert!((active.latitude - 47.0002).abs() < f64::EPSILON);
        assert!((active.longitude - (-151.9998)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolve_controls_defaults() {
        let controls = resolve_controls(&InteractionState::default());
        assert_eq!(controls.map_height, MAP_HEIGHT_DEFAULT);
        assert_eq!(controls.dot_color, DotColor::Primary);
        assert_eq!(controls.basemap, Basemap::Street);
        assert!((controls.depth_limit - DEPTH_AXIS_DEFAULT).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolve_controls_checkbox_mapping() {
        let state = InteractionState {
            alternate_dots: true,
            satellite: true,
            map_height: 500,
            depth_limit: 1000.0,
            ..InteractionState::default()
        };
        let controls = resolve_controls(&state);
        assert_eq!(controls.dot_color, DotColor::Alternate);
        assert_eq!(controls.dot_color.css(), "fuchsia");
        assert_eq!(controls.basemap, Basemap::Satellite);
        assert_eq!(controls.map_height, 500);
        assert!((controls.depth_limit - 1000.0).abs() < f64::EPSILON);
    }
}
