// Buoy domain models
use super::sensor::SensorStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuoySensors {
    pub temperature: f64,
    pub humidity: f64,
    pub wave_height: f64,
    pub wind_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuoyRecord {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
    pub status: SensorStatus,
    pub battery: u8,
    pub signal: u8,
    pub last_update: String,
    pub sensors: BuoySensors,
}

/// Per-buoy classification used by the sensor tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingLevel {
    Low,
    Normal,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionStatus {
    Stable,
    Normal,
    Unstable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuoyTemperatureRow {
    pub id: String,
    pub name: String,
    pub temperature: f64,
    pub status: ReadingLevel,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuoyWaveRow {
    pub id: String,
    pub name: String,
    pub height: f64,
    pub period: f64,
    pub direction: String,
    pub status: ReadingLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuoyWindRow {
    pub id: String,
    pub name: String,
    pub speed: f64,
    pub gust: f64,
    pub direction_deg: u16,
    pub direction_text: String,
    pub status: ReadingLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuoyHealthRow {
    pub id: String,
    pub name: String,
    pub battery: u8,
    pub signal: u8,
    pub temperature: f64,
    pub storage: u8,
    pub uptime: f64,
    pub status: HealthStatus,
    pub last_maintenance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuoyGyroRow {
    pub id: String,
    pub name: String,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
    pub stability: f64,
    pub status: MotionStatus,
}

/// The fleet table shown by a per-sensor view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rows", rename_all = "lowercase")]
pub enum FleetTable {
    Temperature(Vec<BuoyTemperatureRow>),
    Waves(Vec<BuoyWaveRow>),
    Wind(Vec<BuoyWindRow>),
    Health(Vec<BuoyHealthRow>),
    Gyro(Vec<BuoyGyroRow>),
}
