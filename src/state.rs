use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{
    AvailabilityApi, BookingApi, ContactApi, DeviceStore, Geocoder, MessageApi, ServiceCatalogApi,
};
use crate::domain::services::session_manager::SessionManager;

/// The wired object graph: one session manager plus one implementation
/// of each backend port, mock or live depending on prototype mode.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn DeviceStore>,
    pub session: Arc<SessionManager>,
    pub booking_api: Arc<dyn BookingApi>,
    pub availability_api: Arc<dyn AvailabilityApi>,
    pub catalog_api: Arc<dyn ServiceCatalogApi>,
    pub message_api: Arc<dyn MessageApi>,
    pub contact_api: Arc<dyn ContactApi>,
    pub geocoder: Arc<dyn Geocoder>,
}
