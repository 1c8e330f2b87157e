//! Profile chart renderers: one pure function per measured variable,
//! producing a serializable line-chart spec with an inverted depth axis.
//!
//! Pressure is the y axis on every chart, zero at the top, clipped to the
//! depth-limit control. Each variable has a fixed x clip range so curves
//! from different stations stay visually comparable.

use osd_ctd::profile::{Profile, ProfileSample};
use osd_utils::coords;
use serde::Serialize;

use crate::router::{ControlState, StationRef};

pub const TEMPERATURE_TITLE: &str = "Temperature";
pub const TEMPERATURE_LABEL: &str = "deg. C.";
pub const TEMPERATURE_RANGE: [f64; 2] = [0.0, 30.0];

pub const SALINITY_TITLE: &str = "Salinity";
pub const SALINITY_LABEL: &str = "PSS-78";
pub const SALINITY_RANGE: [f64; 2] = [31.0, 37.0];

pub const OXYGEN_TITLE: &str = "Oxygen";
pub const OXYGEN_LABEL: &str = "UMOL/KG";
pub const OXYGEN_RANGE: [f64; 2] = [0.0, 320.0];

pub const DEPTH_AXIS_LABEL: &str = "Depth in DBars";

// Paper-relative spots for the coordinate annotations, bottom right of
// the temperature chart.
const ANNOTATION_X: f64 = 0.14;
const ANNOTATION_LAT_Y: f64 = 0.10;
const ANNOTATION_LON_Y: f64 = 0.05;

/// One (measurement, pressure) vertex of the profile curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// A text overlay at a paper-relative position (0..1 on both axes).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Serializable description of one profile line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileChartSpec {
    pub title: String,
    pub x_label: String,
    pub x_range: [f64; 2],
    pub y_label: String,
    /// Inverted: `[depth_limit, 0]` puts the surface at the top.
    pub y_range: [f64; 2],
    pub points: Vec<ChartPoint>,
    pub annotations: Vec<Annotation>,
}

impl ProfileChartSpec {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn chart_spec(
    profile: &Profile,
    title: &str,
    x_label: &str,
    x_range: [f64; 2],
    depth_limit: f64,
    value: fn(&ProfileSample) -> f64,
    annotations: Vec<Annotation>,
) -> ProfileChartSpec {
    let points = profile
        .samples
        .iter()
        .map(|s| ChartPoint {
            x: value(s),
            y: s.pressure,
        })
        .collect();

    ProfileChartSpec {
        title: title.to_string(),
        x_label: x_label.to_string(),
        x_range,
        y_label: DEPTH_AXIS_LABEL.to_string(),
        y_range: [depth_limit, 0.0],
        points,
        annotations,
    }
}

/// Temperature vs. pressure, with the active station's coordinates
/// overlaid as two fixed-position annotations. In the default no-hover
/// state these carry the default station's coordinates.
pub fn render_temperature(
    profile: &Profile,
    controls: &ControlState,
    station: &StationRef,
) -> ProfileChartSpec {
    let annotations = vec![
        Annotation {
            text: coords::annotate_latitude(station.latitude),
            x: ANNOTATION_X,
            y: ANNOTATION_LAT_Y,
        },
        Annotation {
            text: coords::annotate_longitude(station.longitude),
            x: ANNOTATION_X,
            y: ANNOTATION_LON_Y,
        },
    ];
    chart_spec(
        profile,
        TEMPERATURE_TITLE,
        TEMPERATURE_LABEL,
        TEMPERATURE_RANGE,
        controls.depth_limit,
        |s| s.temperature,
        annotations,
    )
}

/// Salinity vs. pressure. No annotation overlay; the coordinates live on
/// the temperature chart.
pub fn render_salinity(profile: &Profile, controls: &ControlState) -> ProfileChartSpec {
    chart_spec(
        profile,
        SALINITY_TITLE,
        SALINITY_LABEL,
        SALINITY_RANGE,
        controls.depth_limit,
        |s| s.salinity,
        Vec::new(),
    )
}

/// Dissolved oxygen vs. pressure.
pub fn render_oxygen(profile: &Profile, controls: &ControlState) -> ProfileChartSpec {
    chart_spec(
        profile,
        OXYGEN_TITLE,
        OXYGEN_LABEL,
        OXYGEN_RANGE,
        controls.depth_limit,
        |s| s.oxygen,
        Vec::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::render_map;
    use crate::router::{
        resolve_active_station, resolve_controls, HoverPayload, InteractionState,
    };
    use osd_ctd::profile::{parse_profile, FooterPolicy, HEADER_LINES};
    use osd_ctd::station::parse_station_index;

    fn synthetic_profile(data_rows: &[&str]) -> String {
        let mut text = String::new();
        for i in 1..=HEADER_LINES {
            text.push_str(&format!("# header line {}\n", i));
        }
        for row in data_rows {
            text.push_str(row);
            text.push('\n');
        }
        text
    }

    const ROW_A: &str = "2.0,2,10.8551,2,32.9103,2,310.1,2,89.4,2,0.064,2,308.8,2";
    const ROW_B: &str = "4.0,2,10.8570,2,32.9102,2,309.8,2,89.4,2,0.062,2,308.5,2";

    fn two_sample_profile() -> osd_ctd::profile::Profile {
        parse_profile(&synthetic_profile(&[ROW_A, ROW_B]), FooterPolicy::Keep).unwrap()
    }

    #[test]
    fn test_depth_control_inverts_y_range_everywhere() {
        let profile = two_sample_profile();
        let station = resolve_active_station(&InteractionState::default());
        for depth in [200.0, 500.0, 1000.0, 1500.0, 2500.0, 3500.0] {
            let state = InteractionState {
                depth_limit: depth,
                ..InteractionState::default()
            };
            let controls = resolve_controls(&state);
            for spec in [
                render_temperature(&profile, &controls, &station),
                render_salinity(&profile, &controls),
                render_oxygen(&profile, &controls),
            ] {
                assert_eq!(spec.y_range, [depth, 0.0]);
                assert_eq!(spec.y_label, DEPTH_AXIS_LABEL);
            }
        }
    }

    #[test]
    fn test_fixed_x_clip_ranges() {
        let profile = two_sample_profile();
        let controls = ControlState::default();
        let station = resolve_active_station(&InteractionState::default());
        assert_eq!(
            render_temperature(&profile, &controls, &station).x_range,
            [0.0, 30.0]
        );
        assert_eq!(render_salinity(&profile, &controls).x_range, [31.0, 37.0]);
        assert_eq!(render_oxygen(&profile, &controls).x_range, [0.0, 320.0]);
    }

    #[test]
    fn test_default_state_annotates_default_station() {
        let profile = two_sample_profile();
        let controls = ControlState::default();
        let station = resolve_active_station(&InteractionState::default());
        let spec = render_temperature(&profile, &controls, &station);
        assert_eq!(spec.annotations.len(), 2);
        assert_eq!(spec.annotations[0].text, "Lat: 56.0583N");
        assert_eq!(spec.annotations[1].text, "Lon: -156.9622E");
        assert!((spec.annotations[0].x - 0.14).abs() < f64::EPSILON);
        assert!((spec.annotations[0].y - 0.10).abs() < f64::EPSILON);
        assert!((spec.annotations[1].y - 0.05).abs() < f64::EPSILON);

        // siblings carry no overlay
        assert!(render_salinity(&profile, &controls).annotations.is_empty());
        assert!(render_oxygen(&profile, &controls).annotations.is_empty());
    }

    #[test]
    fn test_points_pair_measurement_with_pressure() {
        let profile = two_sample_profile();
        let controls = ControlState::default();
        let spec = render_salinity(&profile, &controls);
        assert_eq!(spec.points.len(), 2);
        assert!((spec.points[0].x - 32.9103).abs() < f64::EPSILON);
        assert!((spec.points[0].y - 2.0).abs() < f64::EPSILON);
        assert!((spec.points[1].y - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hover_scenario_end_to_end() {
        // One-row index; matching 41-line profile (39 header + 2 data rows).
        let stations =
            parse_station_index("filename,date,locn,drop,lat,long\na.csv,2020-01-01,1,1,10.0,-150.0\n")
                .unwrap();
        let map_spec = render_map(&stations, &ControlState::default());
        assert_eq!(map_spec.points.len(), 1);
        assert!((map_spec.points[0].lat - 10.0).abs() < f64::EPSILON);
        assert!((map_spec.points[0].lon - (-150.0)).abs() < f64::EPSILON);

        // Hover the point: the payload carries the bound file reference.
        let state = InteractionState {
            hover: Some(HoverPayload {
                source_file: map_spec.points[0].source_file.clone(),
                latitude: map_spec.points[0].lat,
                longitude: map_spec.points[0].lon,
            }),
            ..InteractionState::default()
        };
        let station = resolve_active_station(&state);
        assert_eq!(station.source_file, "a.csv");

        // The cruise corpus uses the footer-trimming variant: 2 data rows
        // parse to 1 sample.
        let profile =
            parse_profile(&synthetic_profile(&[ROW_A, ROW_B]), FooterPolicy::Trim).unwrap();
        let spec = render_temperature(&profile, &resolve_controls(&state), &station);
        assert_eq!(spec.points.len(), 1);
        assert_eq!(spec.y_range, [2500.0, 0.0]);
        assert_eq!(spec.x_range, [0.0, 30.0]);
        assert_eq!(spec.annotations[0].text, "Lat: 10.0000N");
    }
}
