use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::domain::models::booking::{Booking, BookingStatus, BookingSummary, Occurrence, Pet};
use crate::domain::ports::BookingApi;
use crate::error::ClientError;
use crate::infra::http::api_client::ApiClient;

pub struct HttpBookingApi {
    client: ApiClient,
}

impl HttpBookingApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
struct CreateDraftRequest<'a> {
    client_id: &'a str,
    professional_id: &'a str,
}

#[derive(Deserialize)]
struct CreateDraftResponse {
    booking_id: String,
}

#[derive(Serialize)]
struct UpdateStatusRequest<'a> {
    status: BookingStatus,
    reason: &'a str,
}

#[derive(Serialize)]
struct UpdatePetsRequest<'a> {
    pet_ids: &'a [String],
}

#[derive(Deserialize)]
struct PetsResponse {
    pets: Vec<Pet>,
}

#[derive(Serialize)]
struct UpdateOccurrencesRequest<'a> {
    occurrences: &'a [Occurrence],
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn list_bookings(&self) -> Result<Vec<BookingSummary>, ClientError> {
        self.client.get_json("/api/bookings/v1/").await
    }

    async fn booking_details(&self, id: &str, prorated: bool) -> Result<Booking, ClientError> {
        let path = if prorated {
            format!("/api/bookings/v1/{id}/?is_prorated=true")
        } else {
            format!("/api/bookings/v1/{id}/")
        };
        self.client.get_json(&path).await
    }

    async fn create_draft(&self, client_id: &str, professional_id: &str) -> Result<String, ClientError> {
        let body = CreateDraftRequest { client_id, professional_id };
        let res: CreateDraftResponse = self
            .client
            .send_json(Method::POST, "/api/booking-drafts/v1/", &body)
            .await?;
        Ok(res.booking_id)
    }

    async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
        reason: &str,
    ) -> Result<Booking, ClientError> {
        let body = UpdateStatusRequest { status, reason };
        self.client
            .send_json(Method::POST, &format!("/api/bookings/v1/{id}/update-status/"), &body)
            .await
    }

    async fn update_pets(&self, id: &str, pet_ids: &[String]) -> Result<Vec<Pet>, ClientError> {
        let body = UpdatePetsRequest { pet_ids };
        let res: PetsResponse = self
            .client
            .send_json(
                Method::PATCH,
                &format!("/api/booking-drafts/v1/{id}/update_pets/"),
                &body,
            )
            .await?;
        Ok(res.pets)
    }

    async fn available_pets(&self, id: &str) -> Result<Vec<Pet>, ClientError> {
        let res: PetsResponse = self
            .client
            .get_json(&format!("/api/booking-drafts/v1/{id}/available_pets/"))
            .await?;
        Ok(res.pets)
    }

    async fn update_occurrences(&self, id: &str, occurrences: &[Occurrence]) -> Result<Booking, ClientError> {
        let body = UpdateOccurrencesRequest { occurrences };
        self.client
            .send_json(
                Method::PATCH,
                &format!("/api/bookings/v1/{id}/update_occurrences/"),
                &body,
            )
            .await
    }
}
