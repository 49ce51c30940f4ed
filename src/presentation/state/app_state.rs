use std::sync::Arc;

use crate::application::services::DetectionService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub detection_service: Arc<DetectionService>,
    pub settings: Settings,
}
