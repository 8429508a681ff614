// Application layer - Use cases over the display state
pub mod clock;
pub mod data_provider;
pub mod prediction_service;
pub mod predictor;
pub mod scheduler;
pub mod session_service;
pub mod tick;
pub mod ticker;
pub mod view_session;
