// Application state for HTTP handlers
use crate::application::data_provider::ViewDataProvider;
use crate::application::predictor::PersistencePredictor;
use crate::application::session_service::SessionService;
use crate::domain::map::MapWidgetConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub session_service: SessionService,
    pub provider: Arc<dyn ViewDataProvider>,
    pub map_config: MapWidgetConfig,
    pub predictor: PersistencePredictor,
}
