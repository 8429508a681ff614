// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use buoy_telemetry::application::clock::TokioClock;
use buoy_telemetry::application::data_provider::ViewDataProvider;
use buoy_telemetry::application::prediction_service::PredictionSource;
use buoy_telemetry::application::predictor::PersistencePredictor;
use buoy_telemetry::application::session_service::SessionService;
use buoy_telemetry::application::tick::{RandomSource, ThreadRandom};
use buoy_telemetry::domain::map::MapWidgetConfig;
use buoy_telemetry::infrastructure::config::load_app_config;
use buoy_telemetry::infrastructure::prediction_client::HttpPredictionClient;
use buoy_telemetry::infrastructure::sample_data::StaticSampleProvider;
use buoy_telemetry::presentation::app_state::AppState;
use buoy_telemetry::presentation::routes::build_router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Data provider and prediction source (infrastructure layer)
    let provider: Arc<dyn ViewDataProvider> = Arc::new(StaticSampleProvider);
    let predictions: Option<Arc<dyn PredictionSource>> = if config.prediction.enabled {
        Some(Arc::new(HttpPredictionClient::new(
            config.prediction.endpoint.clone(),
            config.prediction.timeout(),
        )))
    } else {
        tracing::info!("Prediction fetch disabled; insights keep their sample forecasts");
        None
    };

    // Create services (application layer)
    let session_service = SessionService::new(
        provider.clone(),
        predictions,
        Arc::new(TokioClock::new()),
        config.ticks.to_plan(),
        Arc::new(|| Box::new(ThreadRandom::new()) as Box<dyn RandomSource>),
    )
    .with_idle_timeout(config.sessions.idle_timeout());

    // Reclaim sessions whose client went away without unmounting
    let reaper = tokio::spawn(session_service.clone().run_reaper(config.sessions.sweep_interval()));

    // Create application state
    let state = Arc::new(AppState {
        session_service: session_service.clone(),
        provider,
        map_config: MapWidgetConfig::default(),
        predictor: PersistencePredictor,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!("Starting buoy-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    reaper.abort();
    let closed = session_service.unmount_all().await;
    tracing::info!("Shut down with {} sessions unmounted", closed);

    Ok(())
}
