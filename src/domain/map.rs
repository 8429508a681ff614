// Map widget configuration and marker placement
use super::buoy::GeoPoint;
use super::sensor::SensorStatus;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STYLE_URL: &str = "https://basemaps.cartocdn.com/gl/voyager-gl-style/style.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapWidgetConfig {
    pub style_url: String,
    /// `[lng, lat]`
    pub center: [f64; 2],
    pub zoom: f64,
    pub interactive: bool,
}

impl Default for MapWidgetConfig {
    fn default() -> Self {
        Self {
            style_url: DEFAULT_STYLE_URL.to_string(),
            center: [80.4134238425889, 13.020807593858753],
            zoom: 10.5,
            interactive: false,
        }
    }
}

/// A buoy as shown by the map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapBuoy {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
    pub status: SensorStatus,
    pub temperature: f64,
    pub wave_height: f64,
    pub battery: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub buoy_id: String,
    pub name: String,
    pub status: SensorStatus,
    pub temperature: f64,
    pub wave_height: f64,
    pub battery: u8,
    pub left_pct: f64,
    pub top_pct: f64,
}

/// Static overlay offsets in percent; markers are not geographically projected.
pub fn marker_offset(index: usize) -> (f64, f64) {
    let left = 15.0 + index as f64 * 16.0;
    let top = if index % 2 == 0 { 25.0 + 15.0 } else { 25.0 - 5.0 };
    (left, top)
}

pub fn layout_markers(buoys: &[MapBuoy]) -> Vec<MapMarker> {
    buoys
        .iter()
        .enumerate()
        .map(|(index, buoy)| {
            let (left_pct, top_pct) = marker_offset(index);
            MapMarker {
                buoy_id: buoy.id.clone(),
                name: buoy.name.clone(),
                status: buoy.status,
                temperature: buoy.temperature,
                wave_height: buoy.wave_height,
                battery: buoy.battery,
                left_pct,
                top_pct,
            }
        })
        .collect()
}
