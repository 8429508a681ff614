// Buoy telemetry display-state service
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
