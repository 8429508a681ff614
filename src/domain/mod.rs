// Domain layer - Display records and their mutation rules
pub mod alert;
pub mod buoy;
pub mod chart;
pub mod insight;
pub mod map;
pub mod numeric;
pub mod prediction;
pub mod sensor;
pub mod user_stats;
pub mod view;
