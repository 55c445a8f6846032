use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::domain::ports::AuthApi;
use crate::domain::services::session_manager::SessionManager;
use crate::error::ClientError;
use crate::infra::http::{
    api_client::ApiClient, auth_api::HttpAuthApi, availability_api::HttpAvailabilityApi,
    booking_api::HttpBookingApi, catalog_api::HttpServiceCatalogApi, geocoding::NominatimGeocoder,
    message_api::{HttpContactApi, HttpMessageApi},
};
use crate::infra::mock::{
    MockAuthApi, MockAvailabilityApi, MockBookingApi, MockContactApi, MockGeocoder,
    MockMessageApi, MockServiceCatalogApi,
};
use crate::infra::storage::sqlite_store::SqliteDeviceStore;
use crate::state::AppState;

/// Wires the object graph. Prototype mode swaps every backend for its
/// fixed-delay mock in one place; nothing else branches on the flag.
pub async fn bootstrap_state(config: &Config) -> Result<AppState, ClientError> {
    let store = Arc::new(SqliteDeviceStore::open(&config.device_store_path).await?);

    if config.prototype_mode {
        info!("Initializing prototype-mode backends (canned data, 500ms latency)...");

        let auth_api: Arc<dyn AuthApi> = Arc::new(MockAuthApi);
        let session = Arc::new(SessionManager::new(store.clone(), auth_api));

        Ok(AppState {
            config: config.clone(),
            store,
            session,
            booking_api: Arc::new(MockBookingApi::new()),
            availability_api: Arc::new(MockAvailabilityApi),
            catalog_api: Arc::new(MockServiceCatalogApi::new()),
            message_api: Arc::new(MockMessageApi::new()),
            contact_api: Arc::new(MockContactApi),
            geocoder: Arc::new(MockGeocoder),
        })
    } else {
        info!("Initializing live backends against {}...", config.api_base_url);

        let auth_api: Arc<dyn AuthApi> = Arc::new(HttpAuthApi::new(config));
        let session = Arc::new(SessionManager::new(store.clone(), auth_api));
        let client = ApiClient::new(config, session.clone());

        Ok(AppState {
            config: config.clone(),
            store,
            session,
            booking_api: Arc::new(HttpBookingApi::new(client.clone())),
            availability_api: Arc::new(HttpAvailabilityApi::new(client.clone())),
            catalog_api: Arc::new(HttpServiceCatalogApi::new(client.clone())),
            message_api: Arc::new(HttpMessageApi::new(client.clone())),
            contact_api: Arc::new(HttpContactApi::new(client)),
            geocoder: Arc::new(NominatimGeocoder::new(config)),
        })
    }
}
