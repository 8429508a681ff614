// Chart series domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ChartPoint {
    pub fn new(time: &str, value: f64) -> Self {
        Self {
            time: time.to_string(),
            value,
            label: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub id: String,
    pub title: String,
    pub unit: Option<String>,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Build a series from `(time label, value)` pairs
    pub fn from_pairs(id: &str, title: &str, unit: Option<&str>, pairs: &[(&str, f64)]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: unit.map(str::to_string),
            points: pairs.iter().map(|(time, value)| ChartPoint::new(time, *value)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_keeps_order() {
        let series = ChartSeries::from_pairs(
            "waves",
            "Wave Height",
            Some("m"),
            &[("00:00", 1.2), ("04:00", 1.5), ("08:00", 1.8)],
        );
        let times: Vec<&str> = series.points.iter().map(|p| p.time.as_str()).collect();
        assert_eq!(times, vec!["00:00", "04:00", "08:00"]);
        assert_eq!(series.unit.as_deref(), Some("m"));
    }

    #[test]
    fn test_point_without_label_omits_field() {
        let json = serde_json::to_value(ChartPoint::new("Mon", 22.5)).unwrap();
        assert_eq!(json["time"], "Mon");
        assert!(json.get("label").is_none());
    }
}
