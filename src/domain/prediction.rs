// Forecast domain models and the one-shot merge of a remote prediction
use crate::domain::numeric::to_fixed;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionTrend {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionMetric {
    #[serde(rename = "Wave Height")]
    WaveHeight,
    #[serde(rename = "Wind Speed")]
    WindSpeed,
    #[serde(rename = "Temperature")]
    Temperature,
    #[serde(rename = "System Load")]
    SystemLoad,
}

impl PredictionMetric {
    pub const ALL: [PredictionMetric; 4] = [
        PredictionMetric::WaveHeight,
        PredictionMetric::WindSpeed,
        PredictionMetric::Temperature,
        PredictionMetric::SystemLoad,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PredictionMetric::WaveHeight => "Wave Height",
            PredictionMetric::WindSpeed => "Wind Speed",
            PredictionMetric::Temperature => "Temperature",
            PredictionMetric::SystemLoad => "System Load",
        }
    }

    /// Field name of this metric in the prediction response
    pub fn response_field(self) -> &'static str {
        match self {
            PredictionMetric::WaveHeight => "wave_height",
            PredictionMetric::WindSpeed => "wind_speed",
            PredictionMetric::Temperature => "temperature",
            PredictionMetric::SystemLoad => "system_load",
        }
    }

    pub fn format_value(self, value: f64) -> String {
        match self {
            PredictionMetric::WaveHeight => format!("{}m", to_fixed(value, 2)),
            PredictionMetric::WindSpeed => format!("{} km/h", to_fixed(value, 2)),
            PredictionMetric::Temperature => format!("{}°C", to_fixed(value, 2)),
            PredictionMetric::SystemLoad => format!("{}%", to_fixed(value, 0)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub metric: PredictionMetric,
    pub current: String,
    pub predicted: String,
    pub timeframe: String,
    pub trend: PredictionTrend,
}

impl Prediction {
    pub fn new(
        metric: PredictionMetric,
        current: &str,
        predicted: &str,
        timeframe: &str,
        trend: PredictionTrend,
    ) -> Self {
        Self {
            metric,
            current: current.to_string(),
            predicted: predicted.to_string(),
            timeframe: timeframe.to_string(),
            trend,
        }
    }
}

/// Request body for the prediction endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub humidity: f64,
    pub pressure: f64,
    pub wind_direction: f64,
    pub solar_radiation: f64,
    pub prev_wave_height: f64,
    pub prev_wind_speed: f64,
    pub prev_temp: f64,
    pub system_cpu_usage: f64,
}

impl PredictionInput {
    /// Fixed sample payload sent when the insights view mounts
    pub fn sample() -> Self {
        Self {
            humidity: 50.0,
            pressure: 1013.0,
            wind_direction: 180.0,
            solar_radiation: 200.0,
            prev_wave_height: 1.8,
            prev_wind_speed: 15.2,
            prev_temp: 22.5,
            system_cpu_usage: 67.0,
        }
    }
}

/// Typed decode of the prediction endpoint's response.
///
/// The body must be a JSON object. Every field is optional, but a field that
/// is present must be a number (or `null`), otherwise decoding fails and the
/// response is not merged. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct PredictionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_load: Option<f64>,
}

impl TryFrom<Map<String, Value>> for PredictionResponse {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let number = |metric: PredictionMetric| -> Result<Option<f64>, String> {
            let name = metric.response_field();
            match fields.get(name) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::Number(n)) => n
                    .as_f64()
                    .map(Some)
                    .ok_or_else(|| format!("{} is out of range", name)),
                Some(other) => Err(format!("invalid type for {}: expected a number, got {}", name, other)),
            }
        };

        Ok(Self {
            wave_height: number(PredictionMetric::WaveHeight)?,
            wind_speed: number(PredictionMetric::WindSpeed)?,
            temperature: number(PredictionMetric::Temperature)?,
            system_load: number(PredictionMetric::SystemLoad)?,
        })
    }
}

impl PredictionResponse {
    pub fn value_for(&self, metric: PredictionMetric) -> Option<f64> {
        match metric {
            PredictionMetric::WaveHeight => self.wave_height,
            PredictionMetric::WindSpeed => self.wind_speed,
            PredictionMetric::Temperature => self.temperature,
            PredictionMetric::SystemLoad => self.system_load,
        }
    }

    pub fn is_empty(&self) -> bool {
        PredictionMetric::ALL
            .iter()
            .all(|metric| self.value_for(*metric).is_none())
    }
}

/// Parse the leading decimal number of a display string, e.g. "11.2 km/h" -> 11.2
pub fn leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '+' | '-' if idx == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = idx + ch.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    trimmed[..end].parse::<f64>().ok()
}

/// Overwrite `predicted` and `trend` for every metric the response carries.
/// Returns how many predictions were touched.
pub fn merge_predictions(predictions: &mut [Prediction], response: &PredictionResponse) -> usize {
    let mut merged = 0;

    for prediction in predictions.iter_mut() {
        let Some(value) = response.value_for(prediction.metric) else {
            continue;
        };

        prediction.predicted = prediction.metric.format_value(value);
        // A current reading that doesn't parse never compares greater
        prediction.trend = match leading_float(&prediction.current) {
            Some(current) if value > current => PredictionTrend::Up,
            _ => PredictionTrend::Down,
        };
        merged += 1;
    }

    merged
}
