// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_response;
pub mod prediction_client;
pub mod sample_data;
pub mod update_stream;
