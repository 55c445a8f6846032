use crate::domain::models::booking::BookingStatus;
use crate::domain::models::user::UserRole;

/// Statuses in which the professional may edit booking details
/// (pets, service type, occurrences).
pub const EDITABLE_STATES: [BookingStatus; 3] = [
    BookingStatus::PendingInitialProfessionalChanges,
    BookingStatus::PendingProfessionalChanges,
    BookingStatus::ConfirmedPendingProfessionalChanges,
];

pub fn can_edit(role: UserRole, status: BookingStatus) -> bool {
    role == UserRole::Professional && EDITABLE_STATES.contains(&status)
}

/// The status-changing actions a viewer can take on a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingTransition {
    /// Client accepts the proposed details.
    Approve,
    /// Client rejects the proposed details.
    Deny,
    /// Professional sends edited details to the client for review.
    SendForApproval,
    /// Client asks for changes on a confirmed booking.
    RequestChanges,
    /// Either party cancels a non-terminal booking.
    Cancel,
}

impl BookingTransition {
    pub fn target(&self) -> BookingStatus {
        match self {
            BookingTransition::Approve => BookingStatus::Confirmed,
            BookingTransition::Deny => BookingStatus::Denied,
            BookingTransition::SendForApproval => BookingStatus::PendingClientApproval,
            BookingTransition::RequestChanges => BookingStatus::ConfirmedPendingProfessionalChanges,
            BookingTransition::Cancel => BookingStatus::Cancelled,
        }
    }
}

pub fn allowed_transitions(role: UserRole, status: BookingStatus) -> Vec<BookingTransition> {
    let mut out = Vec::new();

    match role {
        UserRole::PetOwner => {
            if status == BookingStatus::PendingClientApproval {
                out.push(BookingTransition::Approve);
                out.push(BookingTransition::Deny);
            }
            if status == BookingStatus::Confirmed {
                out.push(BookingTransition::RequestChanges);
            }
        }
        UserRole::Professional => {
            if EDITABLE_STATES.contains(&status) {
                out.push(BookingTransition::SendForApproval);
            }
        }
    }

    if !status.is_terminal() {
        out.push(BookingTransition::Cancel);
    }

    out
}

pub fn is_transition_allowed(role: UserRole, status: BookingStatus, transition: BookingTransition) -> bool {
    allowed_transitions(role, status).contains(&transition)
}
