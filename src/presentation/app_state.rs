// Application state for HTTP handlers
use crate::application::analytics_service::AnalyticsService;
use crate::application::record_service::RecordService;

#[derive(Clone)]
pub struct AppState {
    pub record_service: RecordService,
    pub analytics_service: AnalyticsService,
}
