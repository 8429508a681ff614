// Per-view display state
use super::alert::Alert;
use super::buoy::{BuoyRecord, FleetTable};
use super::chart::ChartSeries;
use super::insight::Insight;
use super::map::MapMarker;
use super::prediction::Prediction;
use super::sensor::SensorReading;
use super::user_stats::UserStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Dashboard,
    Insights,
    Temperature,
    Waves,
    Wind,
    Health,
    Gyro,
    Map,
}

impl ViewKind {
    pub const ALL: [ViewKind; 8] = [
        ViewKind::Dashboard,
        ViewKind::Insights,
        ViewKind::Temperature,
        ViewKind::Waves,
        ViewKind::Wind,
        ViewKind::Health,
        ViewKind::Gyro,
        ViewKind::Map,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ViewKind::Dashboard => "dashboard",
            ViewKind::Insights => "insights",
            ViewKind::Temperature => "temperature",
            ViewKind::Waves => "waves",
            ViewKind::Wind => "wind",
            ViewKind::Health => "health",
            ViewKind::Gyro => "gyro",
            ViewKind::Map => "map",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for ViewKind {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Everything a mounted view renders. Fields a view doesn't use stay empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub kind: ViewKind,
    pub sensors: Vec<SensorReading>,
    pub buoys: Vec<BuoyRecord>,
    pub charts: Vec<ChartSeries>,
    pub fleet: Option<FleetTable>,
    pub alerts: Vec<Alert>,
    pub insights: Vec<Insight>,
    pub predictions: Vec<Prediction>,
    pub markers: Vec<MapMarker>,
    pub header: UserStats,
    pub tick_count: u64,
    pub mounted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ViewState {
    pub fn empty(kind: ViewKind) -> Self {
        let now = Utc::now();
        Self {
            kind,
            sensors: Vec::new(),
            buoys: Vec::new(),
            charts: Vec::new(),
            fleet: None,
            alerts: Vec::new(),
            insights: Vec::new(),
            predictions: Vec::new(),
            markers: Vec::new(),
            header: UserStats::default(),
            tick_count: 0,
            mounted_at: now,
            updated_at: now,
        }
    }

    pub fn sensor_mut(&mut self, title: &str) -> Option<&mut SensorReading> {
        self.sensors.iter_mut().find(|s| s.title == title)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
