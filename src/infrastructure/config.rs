use crate::application::ticker::TickPlan;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub prediction: PredictionSettings,
    #[serde(default)]
    pub ticks: TickSettings,
    #[serde(default)]
    pub sessions: SessionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictionSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// 0 disables the timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl PredictionSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TickSettings {
    #[serde(default = "default_sensor_period_ms")]
    pub sensor_period_ms: u64,
    #[serde(default = "default_sensor_title")]
    pub sensor_title: String,
    #[serde(default = "default_sensor_delta")]
    pub sensor_delta: f64,
    #[serde(default = "default_header_period_ms")]
    pub header_period_ms: u64,
    #[serde(default = "default_header_max_xp_gain")]
    pub header_max_xp_gain: u32,
}

impl Default for TickSettings {
    fn default() -> Self {
        Self {
            sensor_period_ms: default_sensor_period_ms(),
            sensor_title: default_sensor_title(),
            sensor_delta: default_sensor_delta(),
            header_period_ms: default_header_period_ms(),
            header_max_xp_gain: default_header_max_xp_gain(),
        }
    }
}

impl TickSettings {
    pub fn to_plan(&self) -> TickPlan {
        TickPlan {
            sensor_period: Duration::from_millis(self.sensor_period_ms),
            sensor_title: self.sensor_title.clone(),
            sensor_delta: self.sensor_delta,
            header_period: Duration::from_millis(self.header_period_ms),
            header_max_xp_gain: self.header_max_xp_gain,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    /// 0 keeps sessions until they are unmounted
    #[serde(default = "default_idle_timeout_ms")]
    pub idle_timeout_ms: u64,
    #[serde(default = "default_sweep_interval_ms")]
    pub sweep_interval_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            idle_timeout_ms: default_idle_timeout_ms(),
            sweep_interval_ms: default_sweep_interval_ms(),
        }
    }
}

impl SessionSettings {
    pub fn idle_timeout(&self) -> Option<Duration> {
        (self.idle_timeout_ms > 0).then(|| Duration::from_millis(self.idle_timeout_ms))
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.sweep_interval_ms)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    "http://localhost:8000/predict".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_sensor_period_ms() -> u64 {
    5_000
}

fn default_sensor_title() -> String {
    "Avg Temperature".to_string()
}

fn default_sensor_delta() -> f64 {
    0.2
}

fn default_header_period_ms() -> u64 {
    30_000
}

fn default_header_max_xp_gain() -> u32 {
    10
}

fn default_idle_timeout_ms() -> u64 {
    300_000
}

fn default_sweep_interval_ms() -> u64 {
    30_000
}

/// Load `config/dashboard.toml` (optional) with `BUOY__SECTION__KEY`
/// environment overrides on top.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("BUOY")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    build_config(builder)
}

fn build_config(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> anyhow::Result<AppConfig> {
    let settings = builder.build()?;
    let config: AppConfig = settings.try_deserialize()?;

    if config.ticks.sensor_period_ms == 0 || config.ticks.header_period_ms == 0 {
        anyhow::bail!("tick periods must be greater than zero");
    }

    if config.sessions.sweep_interval_ms == 0 {
        anyhow::bail!("sessions.sweep_interval_ms must be greater than zero");
    }

    Ok(config)
}
