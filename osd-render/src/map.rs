//! Map renderer: the full station index plus map controls into a
//! geographic scatter spec for the Leaflet bridge.

use osd_ctd::station::Station;
use serde::Serialize;

use crate::router::{Basemap, ControlState};

/// Plain street basemap tiles.
pub const STREET_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const STREET_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// USGS imagery raster for the satellite background. Tiles outside the
/// USA may be blank at small scales.
pub const SATELLITE_TILE_URL: &str =
    "https://basemap.nationalmap.gov/arcgis/rest/services/USGSImageryOnly/MapServer/tile/{z}/{y}/{x}";
pub const SATELLITE_ATTRIBUTION: &str = "United States Geological Survey";

/// Fixed initial zoom of the station map.
pub const MAP_ZOOM: f64 = 1.2;

pub const MAP_TITLE: &str = "GP15 sounding locns";

/// One station dot. `source_file` is carried into the hover payload, so
/// the router can key the profile lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub source_file: String,
    pub lat: f64,
    pub lon: f64,
    /// Hover label (location number)
    pub locn: String,
    /// Hover detail (drop number)
    pub drop: String,
}

/// Serializable description of the station map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSpec {
    pub title: String,
    pub points: Vec<MapPoint>,
    pub dot_color: String,
    pub tile_url: String,
    pub attribution: String,
    pub zoom: f64,
    pub height: u32,
    pub center_lat: f64,
    pub center_lon: f64,
}

impl MapSpec {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Build the map spec: one point per station, colored and backed per the
/// current controls.
pub fn render_map(stations: &[Station], controls: &ControlState) -> MapSpec {
    let points: Vec<MapPoint> = stations
        .iter()
        .map(|s| MapPoint {
            source_file: s.source_file.clone(),
            lat: s.latitude,
            lon: s.longitude,
            locn: s.location.clone(),
            drop: s.cast.clone(),
        })
        .collect();

    let (tile_url, attribution) = match controls.basemap {
        Basemap::Street => (STREET_TILE_URL, STREET_ATTRIBUTION),
        Basemap::Satellite => (SATELLITE_TILE_URL, SATELLITE_ATTRIBUTION),
    };

    // Center on the station centroid; the cruise track is a long
    // meridional line, so the mean keeps it in frame at the fixed zoom.
    let (center_lat, center_lon) = if points.is_empty() {
        (0.0, 0.0)
    } else {
        let n = points.len() as f64;
        (
            points.iter().map(|p| p.lat).sum::<f64>() / n,
            points.iter().map(|p| p.lon).sum::<f64>() / n,
        )
    };

    MapSpec {
        title: MAP_TITLE.to_string(),
        points,
        dot_color: controls.dot_color.css().to_string(),
        tile_url: tile_url.to_string(),
        attribution: attribution.to_string(),
        zoom: MAP_ZOOM,
        height: controls.map_height,
        center_lat,
        center_lon,
    }
}
