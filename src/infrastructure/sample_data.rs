// Static sample data provider
use crate::application::data_provider::ViewDataProvider;
use crate::domain::alert::{Alert, Severity};
use crate::domain::buoy::{
    BuoyGyroRow, BuoyHealthRow, BuoyRecord, BuoySensors, BuoyTemperatureRow, BuoyWaveRow,
    BuoyWindRow, FleetTable, GeoPoint, HealthStatus, MotionStatus, ReadingLevel,
};
use crate::domain::chart::ChartSeries;
use crate::domain::insight::{Impact, Insight, InsightKind};
use crate::domain::map::{MapBuoy, layout_markers};
use crate::domain::prediction::{Prediction, PredictionInput, PredictionMetric, PredictionTrend};
use crate::domain::sensor::{SensorReading, SensorStatus, Trend};
use crate::domain::view::{ViewKind, ViewState};

const HOURS: [&str; 12] = [
    "00:00", "02:00", "04:00", "06:00", "08:00", "10:00", "12:00", "14:00", "16:00", "18:00",
    "20:00", "22:00",
];

/// Seeds every view from fixed sample arrays. Each call builds new records,
/// so sessions never share state.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSampleProvider;

impl ViewDataProvider for StaticSampleProvider {
    fn seed(&self, kind: ViewKind) -> ViewState {
        let mut state = ViewState::empty(kind);

        match kind {
            ViewKind::Dashboard => {
                state.sensors = dashboard_sensors();
                state.buoys = fleet();
                state.charts = vec![
                    ChartSeries::from_pairs(
                        "temperature",
                        "Temperature Trends",
                        Some("°C"),
                        &[("00:00", 22.1), ("04:00", 21.8), ("08:00", 22.9), ("12:00", 24.2), ("16:00", 23.8), ("20:00", 22.5)],
                    ),
                    ChartSeries::from_pairs(
                        "wave-height",
                        "Wave Height Analysis",
                        Some("m"),
                        &[("00:00", 1.2), ("04:00", 1.5), ("08:00", 1.8), ("12:00", 2.1), ("16:00", 1.9), ("20:00", 1.6)],
                    ),
                ];
            }
            ViewKind::Insights => {
                state.insights = insights();
                state.predictions = seeded_predictions();
            }
            ViewKind::Temperature => {
                state.charts = vec![
                    hourly("temperature", "24-Hour Temperature", "°C", [22.1, 21.9, 21.8, 22.2, 22.9, 23.5, 24.2, 24.8, 23.8, 23.1, 22.5, 22.3]),
                    ChartSeries::from_pairs(
                        "weekly",
                        "Weekly Average",
                        Some("°C"),
                        &[("Mon", 22.5), ("Tue", 23.1), ("Wed", 21.8), ("Thu", 24.2), ("Fri", 23.7), ("Sat", 22.9), ("Sun", 23.4)],
                    ),
                ];
                state.fleet = Some(FleetTable::Temperature(vec![
                    temperature_row("BOY-001", "Atlantic Pioneer", 23.1, ReadingLevel::Normal, "North Atlantic"),
                    temperature_row("BOY-002", "Pacific Guardian", 21.8, ReadingLevel::Normal, "Pacific Coast"),
                    temperature_row("BOY-003", "Arctic Sentinel", 18.5, ReadingLevel::Low, "Arctic Circle"),
                    temperature_row("BOY-004", "Gulf Monitor", 26.2, ReadingLevel::High, "Gulf of Mexico"),
                    temperature_row("BOY-005", "Baltic Watcher", 19.7, ReadingLevel::Normal, "Baltic Sea"),
                ]));
                state.alerts = vec![
                    Alert::new("2 hours ago", None, "Temperature spike detected in Gulf Monitor", Severity::Warning),
                    Alert::new("5 hours ago", None, "Arctic Sentinel showing consistently low readings", Severity::Info),
                    Alert::new("1 day ago", None, "All sensors calibrated successfully", Severity::Success),
                ];
            }
            ViewKind::Waves => {
                state.charts = vec![
                    hourly("wave-height", "Wave Height", "m", [1.2, 1.4, 1.5, 1.8, 2.1, 2.3, 2.5, 2.8, 2.4, 2.1, 1.9, 1.6]),
                    hourly("wave-period", "Wave Period", "s", [6.2, 6.5, 6.8, 7.1, 7.4, 7.8, 8.2, 8.5, 8.1, 7.7, 7.3, 6.9]),
                ];
                state.fleet = Some(FleetTable::Waves(vec![
                    wave_row("BOY-001", "Atlantic Pioneer", 1.9, 7.2, "NW", ReadingLevel::Normal),
                    wave_row("BOY-002", "Pacific Guardian", 2.8, 8.1, "SW", ReadingLevel::High),
                    wave_row("BOY-003", "Arctic Sentinel", 0.8, 5.5, "N", ReadingLevel::Low),
                    wave_row("BOY-004", "Gulf Monitor", 1.5, 6.8, "SE", ReadingLevel::Normal),
                    wave_row("BOY-005", "Baltic Watcher", 1.2, 6.2, "E", ReadingLevel::Normal),
                ]));
            }
            ViewKind::Wind => {
                state.charts = vec![
                    hourly("wind-speed", "Wind Speed", "km/h", [12.5, 11.8, 13.2, 15.1, 16.8, 18.2, 19.5, 21.3, 18.7, 16.4, 15.2, 13.9]),
                    hourly("wind-gust", "Wind Gusts", "km/h", [18.2, 17.1, 19.8, 22.3, 24.7, 26.1, 28.9, 31.2, 27.5, 24.8, 22.1, 20.4]),
                ];
                state.fleet = Some(FleetTable::Wind(vec![
                    wind_row("BOY-001", "Atlantic Pioneer", 15.2, 22.1, 245, "SW", ReadingLevel::Normal),
                    wind_row("BOY-002", "Pacific Guardian", 21.3, 31.2, 285, "NW", ReadingLevel::High),
                    wind_row("BOY-003", "Arctic Sentinel", 8.7, 12.4, 15, "N", ReadingLevel::Low),
                    wind_row("BOY-004", "Gulf Monitor", 12.8, 18.9, 155, "SE", ReadingLevel::Normal),
                    wind_row("BOY-005", "Baltic Watcher", 14.1, 20.3, 220, "SW", ReadingLevel::Normal),
                ]));
            }
            ViewKind::Health => {
                state.charts = vec![
                    hourly("battery", "Average Battery", "%", [89.0, 87.0, 85.0, 83.0, 85.0, 87.0, 91.0, 93.0, 91.0, 89.0, 87.0, 86.0]),
                    hourly("uptime", "System Uptime", "%", [99.8, 99.9, 99.7, 99.6, 99.8, 99.9, 100.0, 99.9, 99.8, 99.9, 99.7, 99.8]),
                ];
                state.fleet = Some(FleetTable::Health(vec![
                    health_row("BOY-001", "Atlantic Pioneer", [87, 92, 78], 42.0, 99.8, HealthStatus::Healthy, "2 weeks ago"),
                    health_row("BOY-002", "Pacific Guardian", [45, 78, 84], 38.0, 98.2, HealthStatus::Warning, "1 month ago"),
                    health_row("BOY-003", "Arctic Sentinel", [12, 0, 92], 35.0, 0.0, HealthStatus::Critical, "3 months ago"),
                    health_row("BOY-004", "Gulf Monitor", [91, 88, 65], 44.0, 99.9, HealthStatus::Healthy, "1 week ago"),
                    health_row("BOY-005", "Baltic Watcher", [73, 85, 71], 40.0, 99.5, HealthStatus::Healthy, "10 days ago"),
                ]));
                state.alerts = vec![
                    Alert::new("30 min ago", Some("Arctic Sentinel"), "System offline - No response", Severity::Critical),
                    Alert::new("2 hours ago", Some("Pacific Guardian"), "Low battery warning", Severity::Warning),
                    Alert::new("4 hours ago", Some("Atlantic Pioneer"), "Scheduled maintenance completed", Severity::Success),
                    Alert::new("8 hours ago", Some("Gulf Monitor"), "High CPU temperature detected", Severity::Warning),
                    Alert::new("1 day ago", Some("Baltic Watcher"), "Firmware update successful", Severity::Success),
                ];
            }
            ViewKind::Gyro => {
                state.charts = vec![
                    hourly("gyro-x", "Angular Velocity", "°/s", [0.2, 0.4, 0.1, 0.8, 1.2, 1.8, 2.1, 1.9, 1.4, 1.1, 0.7, 0.3]),
                    hourly("stability", "Platform Stability", "%", [95.2, 94.8, 96.1, 92.3, 89.7, 87.2, 85.4, 87.8, 91.2, 93.5, 95.8, 96.7]),
                ];
                state.fleet = Some(FleetTable::Gyro(vec![
                    gyro_row("BOY-001", "Atlantic Pioneer", [2.1, 1.8, 0.5], 91.2, MotionStatus::Normal),
                    gyro_row("BOY-002", "Pacific Guardian", [3.8, 4.2, 1.2], 78.5, MotionStatus::Unstable),
                    gyro_row("BOY-003", "Arctic Sentinel", [0.8, 0.6, 0.2], 97.8, MotionStatus::Stable),
                    gyro_row("BOY-004", "Gulf Monitor", [1.5, 1.2, 0.4], 93.7, MotionStatus::Normal),
                    gyro_row("BOY-005", "Baltic Watcher", [2.3, 2.1, 0.7], 89.4, MotionStatus::Normal),
                ]));
                state.alerts = vec![
                    Alert::new("1 hour ago", Some("Pacific Guardian"), "High roll motion detected", Severity::Warning),
                    Alert::new("3 hours ago", Some("Atlantic Pioneer"), "Stability normalized", Severity::Success),
                    Alert::new("6 hours ago", Some("Gulf Monitor"), "Minor pitch fluctuation", Severity::Info),
                    Alert::new("12 hours ago", Some("Baltic Watcher"), "Gyroscope calibration completed", Severity::Success),
                ];
            }
            ViewKind::Map => {
                state.markers = layout_markers(&map_buoys());
            }
        }

        state
    }

    fn prediction_input(&self) -> PredictionInput {
        PredictionInput::sample()
    }
}

fn dashboard_sensors() -> Vec<SensorReading> {
    vec![
        SensorReading::new("Avg Temperature", "22.5", "°C", SensorStatus::Online, Trend::Up, "+0.3°")
            .with_route("/sensors/temperature"),
        SensorReading::new("Humidity", "68", "%", SensorStatus::Online, Trend::Stable, "±2%")
            .with_route("/sensors/temperature"),
        SensorReading::new("Wave Height", "1.8", "m", SensorStatus::Warning, Trend::Up, "+0.4m")
            .with_route("/sensors/waves"),
        SensorReading::new("Wind Speed", "15.2", "km/h", SensorStatus::Online, Trend::Down, "-2.1")
            .with_route("/sensors/wind"),
        SensorReading::new("System Health", "94", "%", SensorStatus::Online, Trend::Up, "+2%")
            .with_route("/sensors/health"),
        SensorReading::new("Avg Gyro", "2.1", "°/s", SensorStatus::Online, Trend::Stable, "±0.1")
            .with_route("/sensors/gyro"),
    ]
}

/// The dashboard's buoy status cards
pub fn fleet() -> Vec<BuoyRecord> {
    vec![
        buoy(
            "BOY-001",
            "Atlantic Pioneer",
            (40.7128, -74.0060),
            SensorStatus::Online,
            (87, 92),
            "2 min ago",
            [23.1, 65.0, 1.9, 14.8],
        ),
        buoy(
            "BOY-002",
            "Pacific Guardian",
            (34.0522, -118.2437),
            SensorStatus::Warning,
            (45, 78),
            "5 min ago",
            [21.8, 72.0, 2.1, 16.2],
        ),
        buoy(
            "BOY-003",
            "Arctic Sentinel",
            (71.0588, -8.2275),
            SensorStatus::Offline,
            (12, 0),
            "2 hours ago",
            [18.5, 85.0, 0.8, 8.5],
        ),
    ]
}

pub fn map_buoys() -> Vec<MapBuoy> {
    let buoy = |id: &str, name: &str, lat: f64, lng: f64, status, temperature, wave_height, battery| MapBuoy {
        id: id.to_string(),
        name: name.to_string(),
        location: GeoPoint { lat, lng },
        status,
        temperature,
        wave_height,
        battery,
    };

    vec![
        buoy("BOY-001", "Atlantic Pioneer", 13.0905, 80.32045, SensorStatus::Online, 23.1, 1.9, 87),
        buoy("BOY-002", "Pacific Guardian", 13.1215, 80.35961, SensorStatus::Warning, 21.8, 2.8, 45),
        buoy("BOY-003", "Arctic Sentinel", 13.0531, 80.40686, SensorStatus::Offline, 18.5, 0.8, 12),
        buoy("BOY-004", "Gulf Monitor", 13.1096, 80.45072, SensorStatus::Online, 26.2, 1.5, 91),
        buoy("BOY-005", "Baltic Watcher", 13.0544, 80.36744, SensorStatus::Online, 19.7, 1.2, 73),
    ]
}

fn seeded_predictions() -> Vec<Prediction> {
    vec![
        Prediction::new(PredictionMetric::WaveHeight, "1.2m", "2.4m", "Next 6h", PredictionTrend::Up),
        Prediction::new(PredictionMetric::WindSpeed, "11.2 km/h", "22.1 km/h", "Next 4h", PredictionTrend::Up),
        Prediction::new(PredictionMetric::Temperature, "12.5°C", "21.8°C", "Next 12h", PredictionTrend::Down),
        Prediction::new(PredictionMetric::SystemLoad, "47%", "45%", "Next 2h", PredictionTrend::Down),
    ]
}

fn insights() -> Vec<Insight> {
    let insight = |kind, title: &str, description: &str, confidence, impact, action: &str, timestamp: &str| Insight {
        kind,
        title: title.to_string(),
        description: description.to_string(),
        confidence,
        impact,
        action: action.to_string(),
        timestamp: timestamp.to_string(),
    };

    vec![
        insight(
            InsightKind::Prediction,
            "Weather Pattern Analysis",
            "Based on current sensor data, weather models predict increased wave activity in the next 6-8 hours across sectors 4-7.",
            87,
            Impact::Medium,
            "Recommend adjusting buoy sensitivity settings and preparing maintenance crews.",
            "2 minutes ago",
        ),
        insight(
            InsightKind::Anomaly,
            "Temperature Anomaly Detection",
            "BOY-003 showing unusual temperature readings (3°C below average) compared to historical data and nearby buoys.",
            94,
            Impact::High,
            "Investigate sensor calibration and check for potential hardware issues.",
            "15 minutes ago",
        ),
        insight(
            InsightKind::Optimization,
            "Energy Efficiency Opportunity",
            "Analysis suggests 12% energy savings possible by optimizing data transmission schedules during low-activity periods.",
            78,
            Impact::Low,
            "Implement adaptive transmission protocol for non-critical sensors.",
            "1 hour ago",
        ),
        insight(
            InsightKind::Trend,
            "Seasonal Migration Pattern",
            "Marine life activity correlation suggests optimal timing for reduced sensor sensitivity to minimize false readings.",
            82,
            Impact::Medium,
            "Schedule sensitivity adjustments for periods of high marine activity.",
            "3 hours ago",
        ),
    ]
}

fn hourly(id: &str, title: &str, unit: &str, values: [f64; 12]) -> ChartSeries {
    let pairs: Vec<(&str, f64)> = HOURS.iter().copied().zip(values).collect();
    ChartSeries::from_pairs(id, title, Some(unit), &pairs)
}

fn buoy(
    id: &str,
    name: &str,
    (lat, lng): (f64, f64),
    status: SensorStatus,
    (battery, signal): (u8, u8),
    last_update: &str,
    [temperature, humidity, wave_height, wind_speed]: [f64; 4],
) -> BuoyRecord {
    BuoyRecord {
        id: id.to_string(),
        name: name.to_string(),
        location: GeoPoint { lat, lng },
        status,
        battery,
        signal,
        last_update: last_update.to_string(),
        sensors: BuoySensors {
            temperature,
            humidity,
            wave_height,
            wind_speed,
        },
    }
}

fn temperature_row(id: &str, name: &str, temperature: f64, status: ReadingLevel, location: &str) -> BuoyTemperatureRow {
    BuoyTemperatureRow {
        id: id.to_string(),
        name: name.to_string(),
        temperature,
        status,
        location: location.to_string(),
    }
}

fn wave_row(id: &str, name: &str, height: f64, period: f64, direction: &str, status: ReadingLevel) -> BuoyWaveRow {
    BuoyWaveRow {
        id: id.to_string(),
        name: name.to_string(),
        height,
        period,
        direction: direction.to_string(),
        status,
    }
}

fn wind_row(
    id: &str,
    name: &str,
    speed: f64,
    gust: f64,
    direction_deg: u16,
    direction_text: &str,
    status: ReadingLevel,
) -> BuoyWindRow {
    BuoyWindRow {
        id: id.to_string(),
        name: name.to_string(),
        speed,
        gust,
        direction_deg,
        direction_text: direction_text.to_string(),
        status,
    }
}

/// Battery, signal and storage are percentages
fn health_row(
    id: &str,
    name: &str,
    [battery, signal, storage]: [u8; 3],
    temperature: f64,
    uptime: f64,
    status: HealthStatus,
    last_maintenance: &str,
) -> BuoyHealthRow {
    BuoyHealthRow {
        id: id.to_string(),
        name: name.to_string(),
        battery,
        signal,
        temperature,
        storage,
        uptime,
        status,
        last_maintenance: last_maintenance.to_string(),
    }
}

fn gyro_row(id: &str, name: &str, [roll, pitch, yaw]: [f64; 3], stability: f64, status: MotionStatus) -> BuoyGyroRow {
    BuoyGyroRow {
        id: id.to_string(),
        name: name.to_string(),
        roll,
        pitch,
        yaw,
        stability,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_seed() {
        let state = StaticSampleProvider.seed(ViewKind::Dashboard);
        assert_eq!(state.sensors.len(), 6);
        assert_eq!(state.sensors[0].title, "Avg Temperature");
        assert_eq!(state.sensors[0].value, "22.5");
        assert_eq!(state.buoys.len(), 3);
        assert_eq!(state.charts.len(), 2);
        assert!(state.predictions.is_empty());
    }

    #[test]
    fn test_insights_seed() {
        let state = StaticSampleProvider.seed(ViewKind::Insights);
        let metrics: Vec<PredictionMetric> = state.predictions.iter().map(|p| p.metric).collect();
        assert_eq!(metrics, PredictionMetric::ALL.to_vec());
        assert_eq!(state.insights.len(), 4);
    }

    #[test]
    fn test_sensor_views_have_twelve_hour_series() {
        for kind in [ViewKind::Temperature, ViewKind::Waves, ViewKind::Wind, ViewKind::Health, ViewKind::Gyro] {
            let state = StaticSampleProvider.seed(kind);
            assert!(state.fleet.is_some(), "{kind} has no fleet table");
            assert_eq!(state.charts[0].points.len(), 12, "{kind}");
            assert_eq!(state.charts[0].points[11].time, "22:00");
        }
    }

    #[test]
    fn test_map_seed_places_markers() {
        let state = StaticSampleProvider.seed(ViewKind::Map);
        assert_eq!(state.markers.len(), 5);
        assert_eq!(state.markers[3].buoy_id, "BOY-004");
        assert_eq!(state.markers[3].left_pct, 63.0);
    }

    #[test]
    fn test_seeds_are_independent() {
        let mut first = StaticSampleProvider.seed(ViewKind::Dashboard);
        first.sensors[0].value = "99.9".to_string();
        let second = StaticSampleProvider.seed(ViewKind::Dashboard);
        assert_eq!(second.sensors[0].value, "22.5");
    }
}
