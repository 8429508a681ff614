// Sensor card domain model
use crate::domain::numeric::to_fixed;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Online,
    Warning,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    pub title: String,
    /// Display string, e.g. "22.5" or "68"
    pub value: String,
    pub unit: String,
    pub status: SensorStatus,
    pub trend: Trend,
    pub trend_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

impl SensorReading {
    pub fn new(
        title: &str,
        value: &str,
        unit: &str,
        status: SensorStatus,
        trend: Trend,
        trend_value: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            unit: unit.to_string(),
            status,
            trend,
            trend_value: trend_value.to_string(),
            route: None,
        }
    }

    pub fn with_route(mut self, route: &str) -> Self {
        self.route = Some(route.to_string());
        self
    }

    pub fn numeric_value(&self) -> Option<f64> {
        self.value.trim().parse::<f64>().ok()
    }

    /// Shift the value by `delta` and re-render it with one decimal.
    /// No bound is applied. Returns false if the current value isn't numeric.
    pub fn nudge(&mut self, delta: f64) -> bool {
        match self.numeric_value() {
            Some(current) => {
                self.value = to_fixed(current + delta, 1);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temperature() -> SensorReading {
        SensorReading::new("Avg Temperature", "22.5", "°C", SensorStatus::Online, Trend::Up, "+0.3°")
    }

    #[test]
    fn test_nudge_rounds_to_one_decimal() {
        let mut reading = temperature();
        assert!(reading.nudge(0.07));
        assert_eq!(reading.value, "22.6");

        assert!(reading.nudge(-0.1));
        assert_eq!(reading.value, "22.5");
    }

    #[test]
    fn test_nudge_rounds_ties_up() {
        let mut reading = temperature();
        reading.value = "22.25".to_string();
        assert!(reading.nudge(0.0));
        assert_eq!(reading.value, "22.3");
    }

    #[test]
    fn test_nudge_leaves_other_fields() {
        let mut reading = temperature().with_route("/sensors/temperature");
        let before = reading.clone();
        reading.nudge(0.05);

        assert_eq!(reading.title, before.title);
        assert_eq!(reading.unit, before.unit);
        assert_eq!(reading.status, before.status);
        assert_eq!(reading.trend, before.trend);
        assert_eq!(reading.trend_value, before.trend_value);
        assert_eq!(reading.route, before.route);
    }

    #[test]
    fn test_nudge_is_unbounded() {
        let mut reading = temperature();
        for _ in 0..100 {
            reading.nudge(1.0);
        }
        assert_eq!(reading.value, "122.5");
    }

    #[test]
    fn test_nudge_non_numeric_value() {
        let mut reading = temperature();
        reading.value = "n/a".to_string();
        assert!(!reading.nudge(0.1));
        assert_eq!(reading.value, "n/a");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(temperature()).unwrap();
        assert_eq!(json["trendValue"], "+0.3°");
        assert_eq!(json["status"], "online");
        assert!(json.get("route").is_none());
    }
}
