use crate::domain::models::{
    availability::{AvailabilityChange, AvailabilityData, DefaultSettings},
    booking::{Booking, BookingStatus, BookingSummary, Occurrence, Pet},
    geo::GeoMatch,
    message::{Conversation, Message, OutgoingMessage},
    service::Service,
    session::SessionTokens,
    user::{ContactRequest, ProfessionalStatus, UserInfo},
};
use crate::error::ClientError;
use async_trait::async_trait;

/// Device key-value storage (tokens, role flags, last route).
#[async_trait]
pub trait DeviceStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;
    async fn remove(&self, key: &str) -> Result<(), ClientError>;
}

/// Token lifecycle and account lookups. These calls carry the token
/// explicitly because the session manager sits on top of them.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn obtain_token_pair(&self, email: &str, password: &str) -> Result<SessionTokens, ClientError>;
    async fn refresh_access(&self, refresh_token: &str) -> Result<String, ClientError>;
    async fn professional_status(&self, access_token: &str) -> Result<ProfessionalStatus, ClientError>;
    async fn user_info(&self, access_token: &str) -> Result<UserInfo, ClientError>;
}

#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn list_bookings(&self) -> Result<Vec<BookingSummary>, ClientError>;
    async fn booking_details(&self, id: &str, prorated: bool) -> Result<Booking, ClientError>;
    async fn create_draft(&self, client_id: &str, professional_id: &str) -> Result<String, ClientError>;
    async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
        reason: &str,
    ) -> Result<Booking, ClientError>;
    async fn update_pets(&self, id: &str, pet_ids: &[String]) -> Result<Vec<Pet>, ClientError>;
    async fn available_pets(&self, id: &str) -> Result<Vec<Pet>, ClientError>;
    async fn update_occurrences(&self, id: &str, occurrences: &[Occurrence]) -> Result<Booking, ClientError>;
}

#[async_trait]
pub trait AvailabilityApi: Send + Sync {
    async fn fetch(&self) -> Result<AvailabilityData, ClientError>;
    async fn update(&self, change: &AvailabilityChange) -> Result<(), ClientError>;
    async fn update_defaults(&self, settings: &DefaultSettings) -> Result<(), ClientError>;
}

#[async_trait]
pub trait ServiceCatalogApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Service>, ClientError>;
    async fn create(&self, service: &Service) -> Result<Service, ClientError>;
    async fn update(&self, position: usize, service: &Service) -> Result<Service, ClientError>;
    async fn delete(&self, position: usize) -> Result<(), ClientError>;
}

#[async_trait]
pub trait MessageApi: Send + Sync {
    async fn conversations(&self) -> Result<Vec<Conversation>, ClientError>;
    async fn messages(&self, conversation_id: &str) -> Result<Vec<Message>, ClientError>;
    async fn send(&self, message: &OutgoingMessage) -> Result<Message, ClientError>;
}

#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn submit(&self, request: &ContactRequest) -> Result<(), ClientError>;
}

/// Free-text location search.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<GeoMatch>, ClientError>;
}
