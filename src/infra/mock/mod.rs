//! Prototype-mode backends: every port implemented over canned data
//! behind a fixed delay, so the whole application runs without a
//! server.

pub mod fixtures;

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::domain::models::availability::{AvailabilityChange, AvailabilityData, DefaultSettings};
use crate::domain::models::booking::{
    Booking, BookingStatus, BookingSummary, NewDraftParams, Occurrence, Pet,
};
use crate::domain::models::geo::GeoMatch;
use crate::domain::models::message::{Conversation, Message, OutgoingMessage};
use crate::domain::models::service::Service;
use crate::domain::models::session::SessionTokens;
use crate::domain::models::user::{ContactRequest, ProfessionalStatus, UserInfo};
use crate::domain::ports::{
    AuthApi, AvailabilityApi, BookingApi, ContactApi, Geocoder, MessageApi, ServiceCatalogApi,
};
use crate::domain::services::costs::summarize_costs;
use crate::error::ClientError;

const MOCK_LATENCY: Duration = Duration::from_millis(500);

async fn simulate_latency() {
    tokio::time::sleep(MOCK_LATENCY).await;
}

pub struct MockAuthApi;

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn obtain_token_pair(&self, email: &str, password: &str) -> Result<SessionTokens, ClientError> {
        simulate_latency().await;
        if email.trim().is_empty() || password.is_empty() {
            return Err(ClientError::Unauthorized);
        }
        Ok(SessionTokens {
            access: format!("mock-access-{}", Uuid::new_v4()),
            refresh: format!("mock-refresh-{}", Uuid::new_v4()),
        })
    }

    async fn refresh_access(&self, refresh_token: &str) -> Result<String, ClientError> {
        simulate_latency().await;
        if refresh_token.starts_with("mock-refresh-") {
            Ok(format!("mock-access-{}", Uuid::new_v4()))
        } else {
            Err(ClientError::Unauthorized)
        }
    }

    async fn professional_status(&self, _access_token: &str) -> Result<ProfessionalStatus, ClientError> {
        simulate_latency().await;
        Ok(ProfessionalStatus {
            is_professional: true,
            is_approved_professional: true,
            approved_dog_sitting: true,
            approved_cat_sitting: true,
            approved_exotics_sitting: true,
        })
    }

    async fn user_info(&self, _access_token: &str) -> Result<UserInfo, ClientError> {
        simulate_latency().await;
        Ok(UserInfo {
            first_name: "Sarah".to_string(),
            last_name: "Wilson".to_string(),
            email: "sarah@example.com".to_string(),
        })
    }
}

pub struct MockBookingApi {
    bookings: Mutex<HashMap<String, Booking>>,
}

impl Default for MockBookingApi {
    fn default() -> Self {
        Self {
            bookings: Mutex::new(fixtures::seed_bookings()),
        }
    }
}

impl MockBookingApi {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingApi for MockBookingApi {
    async fn list_bookings(&self) -> Result<Vec<BookingSummary>, ClientError> {
        simulate_latency().await;
        let bookings = self.bookings.lock().await;
        let mut summaries: Vec<BookingSummary> = bookings
            .values()
            .map(|b| BookingSummary {
                id: b.id.clone(),
                client_name: Some(b.client_name.clone()),
                professional_name: Some(b.professional_name.clone()),
                status: b.status,
                date: b
                    .occurrences
                    .first()
                    .map(|o| o.start_date)
                    .unwrap_or_else(|| b.created_at.date_naive()),
                time: b
                    .occurrences
                    .first()
                    .map(|o| o.start_time.clone())
                    .unwrap_or_default(),
            })
            .collect();
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }

    async fn booking_details(&self, id: &str, _prorated: bool) -> Result<Booking, ClientError> {
        simulate_latency().await;
        self.bookings
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound("Booking not found".to_string()))
    }

    async fn create_draft(&self, client_id: &str, professional_id: &str) -> Result<String, ClientError> {
        simulate_latency().await;
        let mut bookings = self.bookings.lock().await;
        let draft = loop {
            let candidate = Booking::new_draft(NewDraftParams {
                client_id: client_id.to_string(),
                professional_id: professional_id.to_string(),
                client_name: None,
                professional_name: None,
            });
            if !bookings.contains_key(&candidate.id) {
                break candidate;
            }
        };
        let id = draft.id.clone();
        bookings.insert(id.clone(), draft);
        debug!(booking_id = %id, "created draft booking");
        Ok(id)
    }

    async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
        reason: &str,
    ) -> Result<Booking, ClientError> {
        simulate_latency().await;
        let mut bookings = self.bookings.lock().await;
        let booking = bookings
            .get_mut(id)
            .ok_or_else(|| ClientError::NotFound("Booking not found".to_string()))?;
        booking.status = status;
        booking.status_reason = if reason.is_empty() {
            None
        } else {
            Some(reason.to_string())
        };
        booking.updated_at = Utc::now();
        Ok(booking.clone())
    }

    async fn update_pets(&self, id: &str, pet_ids: &[String]) -> Result<Vec<Pet>, ClientError> {
        simulate_latency().await;
        let mut bookings = self.bookings.lock().await;
        let booking = bookings
            .get_mut(id)
            .ok_or_else(|| ClientError::NotFound("Booking not found".to_string()))?;
        booking.pets = fixtures::seed_pets()
            .into_iter()
            .filter(|p| pet_ids.contains(&p.id))
            .collect();
        booking.updated_at = Utc::now();
        Ok(booking.pets.clone())
    }

    async fn available_pets(&self, _id: &str) -> Result<Vec<Pet>, ClientError> {
        simulate_latency().await;
        Ok(fixtures::seed_pets())
    }

    async fn update_occurrences(&self, id: &str, occurrences: &[Occurrence]) -> Result<Booking, ClientError> {
        simulate_latency().await;
        let mut bookings = self.bookings.lock().await;
        let booking = bookings
            .get_mut(id)
            .ok_or_else(|| ClientError::NotFound("Booking not found".to_string()))?;
        booking.occurrences = occurrences.to_vec();
        booking.costs = summarize_costs(&booking.occurrences)?;
        booking.updated_at = Utc::now();
        Ok(booking.clone())
    }
}

pub struct MockAvailabilityApi;

#[async_trait]
impl AvailabilityApi for MockAvailabilityApi {
    async fn fetch(&self) -> Result<AvailabilityData, ClientError> {
        simulate_latency().await;
        Ok(fixtures::seed_availability())
    }

    async fn update(&self, change: &AvailabilityChange) -> Result<(), ClientError> {
        simulate_latency().await;
        debug!(dates = change.dates.len(), "accepted availability update");
        Ok(())
    }

    async fn update_defaults(&self, _settings: &DefaultSettings) -> Result<(), ClientError> {
        simulate_latency().await;
        debug!("accepted default settings update");
        Ok(())
    }
}

pub struct MockServiceCatalogApi {
    services: Mutex<Vec<Service>>,
}

impl Default for MockServiceCatalogApi {
    fn default() -> Self {
        Self {
            services: Mutex::new(fixtures::seed_services()),
        }
    }
}

impl MockServiceCatalogApi {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceCatalogApi for MockServiceCatalogApi {
    async fn list(&self) -> Result<Vec<Service>, ClientError> {
        simulate_latency().await;
        Ok(self.services.lock().await.clone())
    }

    async fn create(&self, service: &Service) -> Result<Service, ClientError> {
        simulate_latency().await;
        self.services.lock().await.push(service.clone());
        Ok(service.clone())
    }

    async fn update(&self, position: usize, service: &Service) -> Result<Service, ClientError> {
        simulate_latency().await;
        let mut services = self.services.lock().await;
        let slot = services
            .get_mut(position)
            .ok_or_else(|| ClientError::NotFound("Service not found".to_string()))?;
        *slot = service.clone();
        Ok(service.clone())
    }

    async fn delete(&self, position: usize) -> Result<(), ClientError> {
        simulate_latency().await;
        let mut services = self.services.lock().await;
        if position >= services.len() {
            return Err(ClientError::NotFound("Service not found".to_string()));
        }
        services.remove(position);
        Ok(())
    }
}

pub struct MockMessageApi {
    conversations: Vec<Conversation>,
    messages: Mutex<HashMap<String, Vec<Message>>>,
    next_id: AtomicI64,
}

impl Default for MockMessageApi {
    fn default() -> Self {
        Self {
            conversations: fixtures::seed_conversations(),
            messages: Mutex::new(fixtures::seed_messages()),
            next_id: AtomicI64::new(100),
        }
    }
}

impl MockMessageApi {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageApi for MockMessageApi {
    async fn conversations(&self) -> Result<Vec<Conversation>, ClientError> {
        simulate_latency().await;
        Ok(self.conversations.clone())
    }

    async fn messages(&self, conversation_id: &str) -> Result<Vec<Message>, ClientError> {
        simulate_latency().await;
        Ok(self
            .messages
            .lock()
            .await
            .get(conversation_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn send(&self, message: &OutgoingMessage) -> Result<Message, ClientError> {
        simulate_latency().await;
        let sent = Message {
            message_id: self.next_id.fetch_add(1, Ordering::Relaxed),
            conversation_id: message.conversation_id.clone(),
            sender: fixtures::CURRENT_USER_ID,
            content: message.content.clone(),
            timestamp: Utc::now(),
            booking_id: message.booking_id.clone(),
            status: "sent".to_string(),
            is_booking_request: message.is_booking_request,
            metadata: serde_json::Value::Null,
        };
        self.messages
            .lock()
            .await
            .entry(message.conversation_id.clone())
            .or_default()
            .push(sent.clone());
        Ok(sent)
    }
}

pub struct MockContactApi;

#[async_trait]
impl ContactApi for MockContactApi {
    async fn submit(&self, request: &ContactRequest) -> Result<(), ClientError> {
        simulate_latency().await;
        debug!(from = %request.email, "accepted contact form submission");
        Ok(())
    }
}

pub struct MockGeocoder;

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<GeoMatch>, ClientError> {
        simulate_latency().await;
        Ok(vec![GeoMatch {
            display_name: format!("{query}, Colorado Springs, CO, United States"),
            lat: "38.8339".to_string(),
            lon: "-104.8214".to_string(),
        }])
    }
}
