use tracing::{info, warn};

use crate::domain::models::booking::{Booking, Occurrence};
use crate::domain::models::message::OutgoingMessage;
use crate::domain::models::user::UserRole;
use crate::domain::services::booking_rules::{is_transition_allowed, BookingTransition};
use crate::domain::services::costs::summarize_costs;
use crate::error::ClientError;
use crate::state::AppState;

/// Runs a status transition, optionally delivering an attached chat
/// message first. The message send and the status write are two
/// independent calls with no compensation: a message failure aborts
/// before the status is touched, while a status failure after a sent
/// message leaves the message delivered.
pub async fn submit_transition(
    state: &AppState,
    booking: &Booking,
    viewer: UserRole,
    transition: BookingTransition,
    note: Option<OutgoingMessage>,
    reason: &str,
) -> Result<Booking, ClientError> {
    if !is_transition_allowed(viewer, booking.status, transition) {
        return Err(ClientError::Validation(format!(
            "Cannot {:?} a booking in status '{}'",
            transition, booking.status
        )));
    }

    if let Some(message) = note {
        state.message_api.send(&message).await.map_err(|e| {
            warn!(booking_id = %booking.id, "status note failed to send, leaving status unchanged");
            e
        })?;
    }

    let updated = state
        .booking_api
        .update_booking_status(&booking.id, transition.target(), reason)
        .await?;

    info!(booking_id = %updated.id, status = %updated.status, "booking status updated");
    Ok(updated)
}

/// Saves an edited occurrence list and re-derives the cost totals.
/// Totals are never trusted from storage; they are recomputed from the
/// occurrences on every mutation.
pub async fn save_occurrences(
    state: &AppState,
    booking_id: &str,
    occurrences: Vec<Occurrence>,
) -> Result<Booking, ClientError> {
    let mut updated = state
        .booking_api
        .update_occurrences(booking_id, &occurrences)
        .await?;
    updated.costs = summarize_costs(&updated.occurrences)?;
    Ok(updated)
}
