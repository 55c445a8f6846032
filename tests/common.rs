use std::sync::Arc;
use tempfile::TempDir;

use zenexotics_client::config::Config;
use zenexotics_client::domain::ports::AuthApi;
use zenexotics_client::domain::services::session_manager::SessionManager;
use zenexotics_client::infra::factory::bootstrap_state;
use zenexotics_client::infra::mock::{
    MockAuthApi, MockAvailabilityApi, MockBookingApi, MockContactApi, MockGeocoder,
    MockMessageApi, MockServiceCatalogApi,
};
use zenexotics_client::infra::storage::sqlite_store::SqliteDeviceStore;
use zenexotics_client::state::AppState;

#[allow(dead_code)]
pub struct TestApp {
    pub state: Arc<AppState>,
    _tmp: TempDir,
}

#[allow(dead_code)]
impl TestApp {
    /// Prototype-mode app over a scratch device store.
    pub async fn new() -> Self {
        let tmp = tempfile::tempdir().expect("temp dir");
        let config = test_config(&tmp);
        let state = Arc::new(bootstrap_state(&config).await.expect("bootstrap"));
        Self { state, _tmp: tmp }
    }

    /// Same wiring, but with a caller-provided auth backend so tests
    /// can script token failures.
    pub async fn with_auth(auth_api: Arc<dyn AuthApi>) -> Self {
        let tmp = tempfile::tempdir().expect("temp dir");
        let config = test_config(&tmp);

        let store = Arc::new(
            SqliteDeviceStore::open(&config.device_store_path)
                .await
                .expect("device store"),
        );
        let session = Arc::new(SessionManager::new(store.clone(), auth_api));

        let state = Arc::new(AppState {
            config,
            store,
            session,
            booking_api: Arc::new(MockBookingApi::new()),
            availability_api: Arc::new(MockAvailabilityApi),
            catalog_api: Arc::new(MockServiceCatalogApi::new()),
            message_api: Arc::new(MockMessageApi::new()),
            contact_api: Arc::new(MockContactApi),
            geocoder: Arc::new(MockGeocoder),
        });

        Self { state, _tmp: tmp }
    }

    pub async fn sign_in(&self) {
        self.state
            .session
            .sign_in("sarah@example.com", "hunter2")
            .await
            .expect("sign in");
    }
}

#[allow(dead_code)]
pub fn mock_auth() -> Arc<dyn AuthApi> {
    Arc::new(MockAuthApi)
}

fn test_config(tmp: &TempDir) -> Config {
    Config {
        api_base_url: "http://localhost:0".to_string(),
        prototype_mode: true,
        device_store_path: tmp
            .path()
            .join("device_store.db")
            .to_str()
            .expect("utf-8 temp path")
            .to_string(),
        request_timeout_secs: 5,
        nominatim_url: "http://localhost:0".to_string(),
    }
}
