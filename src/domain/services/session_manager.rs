use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::models::session::SessionSnapshot;
use crate::domain::models::user::{UserInfo, UserRole};
use crate::domain::ports::{AuthApi, DeviceStore};
use crate::error::ClientError;

/// Device-storage keys. Values are plain strings, booleans included;
/// there is no schema versioning.
pub mod keys {
    pub const USER_TOKEN: &str = "userToken";
    pub const REFRESH_TOKEN: &str = "refreshToken";
    pub const USER_ROLE: &str = "userRole";
    pub const IS_APPROVED_PROFESSIONAL: &str = "isApprovedProfessional";
    pub const LAST_ROUTE: &str = "lastRoute";
    pub const PROTOTYPE_BANNER_HIDDEN: &str = "prototype_banner_hidden";
}

#[derive(Default)]
struct SessionState {
    access_token: Option<String>,
    refresh_token: Option<String>,
    role: Option<UserRole>,
    approved_professional: bool,
}

/// Process-wide session state: loaded from device storage on start,
/// mutated on sign-in/out/refresh, persisted back on every change.
pub struct SessionManager {
    store: Arc<dyn DeviceStore>,
    auth_api: Arc<dyn AuthApi>,
    inner: RwLock<SessionState>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn DeviceStore>, auth_api: Arc<dyn AuthApi>) -> Self {
        Self {
            store,
            auth_api,
            inner: RwLock::new(SessionState::default()),
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.inner.read().await;
        SessionSnapshot {
            signed_in: state.access_token.is_some(),
            role: state.role,
            approved_professional: state.approved_professional,
        }
    }

    pub async fn access_token(&self) -> Option<String> {
        self.inner.read().await.access_token.clone()
    }

    /// Restores a previous session from storage. A stored token is
    /// validated against the API; validation failure reports signed-out
    /// without touching storage.
    pub async fn load(&self) -> Result<SessionSnapshot, ClientError> {
        let access = self.store.get(keys::USER_TOKEN).await?;
        let refresh = self.store.get(keys::REFRESH_TOKEN).await?;

        let Some(access) = access else {
            return Ok(SessionSnapshot::signed_out());
        };

        match self.auth_api.professional_status(&access).await {
            Ok(status) => {
                let role = status.role();
                {
                    let mut state = self.inner.write().await;
                    state.access_token = Some(access);
                    state.refresh_token = refresh;
                    state.role = Some(role);
                    state.approved_professional = status.is_approved_professional;
                }
                self.persist_role(role, status.is_approved_professional).await?;
                Ok(self.snapshot().await)
            }
            Err(e) => {
                warn!("stored session failed validation: {}", e.user_message());
                Ok(SessionSnapshot::signed_out())
            }
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SessionSnapshot, ClientError> {
        let tokens = self
            .auth_api
            .obtain_token_pair(&email.to_lowercase(), password)
            .await?;

        self.store.set(keys::USER_TOKEN, &tokens.access).await?;
        self.store.set(keys::REFRESH_TOKEN, &tokens.refresh).await?;

        // A failed status lookup demotes to pet owner rather than
        // failing the sign-in.
        let status = self
            .auth_api
            .professional_status(&tokens.access)
            .await
            .unwrap_or_default();
        let role = status.role();

        {
            let mut state = self.inner.write().await;
            state.access_token = Some(tokens.access);
            state.refresh_token = Some(tokens.refresh);
            state.role = Some(role);
            state.approved_professional = status.is_approved_professional;
        }
        self.persist_role(role, status.is_approved_professional).await?;

        info!(role = role.as_str(), "signed in");
        Ok(self.snapshot().await)
    }

    pub async fn sign_out(&self) -> Result<(), ClientError> {
        {
            let mut state = self.inner.write().await;
            *state = SessionState::default();
        }
        self.store.remove(keys::USER_TOKEN).await?;
        self.store.remove(keys::REFRESH_TOKEN).await?;
        self.store.remove(keys::USER_ROLE).await?;
        self.store.remove(keys::IS_APPROVED_PROFESSIONAL).await?;
        info!("signed out");
        Ok(())
    }

    /// One refresh-token exchange. Failure is terminal for the
    /// session: storage is cleared and `SessionExpired` surfaces so
    /// the caller can redirect to sign-in.
    pub async fn refresh(&self) -> Result<String, ClientError> {
        let refresh = self.inner.read().await.refresh_token.clone();
        let Some(refresh) = refresh else {
            self.sign_out().await?;
            return Err(ClientError::SessionExpired);
        };

        match self.auth_api.refresh_access(&refresh).await {
            Ok(access) => {
                self.store.set(keys::USER_TOKEN, &access).await?;
                self.inner.write().await.access_token = Some(access.clone());
                Ok(access)
            }
            Err(e) => {
                warn!("token refresh failed: {}", e.user_message());
                self.sign_out().await?;
                Err(ClientError::SessionExpired)
            }
        }
    }

    /// Authenticated user-info fetch with the 401-refresh-retry flow:
    /// one refresh, one retry, then give up.
    pub async fn user_info(&self) -> Result<UserInfo, ClientError> {
        let token = self.access_token().await.ok_or(ClientError::Unauthorized)?;
        match self.auth_api.user_info(&token).await {
            Err(e) if e.is_unauthorized() => {
                let fresh = self.refresh().await?;
                self.auth_api.user_info(&fresh).await
            }
            other => other,
        }
    }

    /// Approved professionals can flip between their two views;
    /// everyone else is a pet owner.
    pub async fn switch_role(&self) -> Result<UserRole, ClientError> {
        let role = {
            let mut state = self.inner.write().await;
            let next = if state.approved_professional {
                match state.role {
                    Some(UserRole::Professional) => UserRole::PetOwner,
                    _ => UserRole::Professional,
                }
            } else {
                UserRole::PetOwner
            };
            state.role = Some(next);
            next
        };
        self.store.set(keys::USER_ROLE, role.as_str()).await?;
        Ok(role)
    }

    pub async fn remember_route(&self, route: &str) -> Result<(), ClientError> {
        self.store.set(keys::LAST_ROUTE, route).await
    }

    pub async fn last_route(&self) -> Result<Option<String>, ClientError> {
        self.store.get(keys::LAST_ROUTE).await
    }

    pub async fn hide_prototype_banner(&self) -> Result<(), ClientError> {
        self.store.set(keys::PROTOTYPE_BANNER_HIDDEN, "true").await
    }

    pub async fn prototype_banner_hidden(&self) -> Result<bool, ClientError> {
        Ok(self
            .store
            .get(keys::PROTOTYPE_BANNER_HIDDEN)
            .await?
            .as_deref()
            == Some("true"))
    }

    async fn persist_role(&self, role: UserRole, approved: bool) -> Result<(), ClientError> {
        self.store.set(keys::USER_ROLE, role.as_str()).await?;
        self.store
            .set(
                keys::IS_APPROVED_PROFESSIONAL,
                if approved { "true" } else { "false" },
            )
            .await
    }
}
