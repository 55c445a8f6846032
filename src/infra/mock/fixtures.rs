use chrono::{DateTime, NaiveDate, Utc};
use std::collections::{BTreeMap, HashMap};

use crate::domain::models::availability::{AvailabilityData, BookedSlot, TimeWindow};
use crate::domain::models::booking::{
    AdditionalRate, Booking, BookingStatus, Occurrence, OccurrenceRates, Pet, TimeUnit,
};
use crate::domain::models::message::{Conversation, Message};
use crate::domain::models::service::{NamedRate, Service, ServiceRates};
use crate::domain::services::costs::summarize_costs;

/// The signed-in account in prototype mode.
pub const CURRENT_USER_ID: i64 = 101;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ts(value: &str) -> DateTime<Utc> {
    value.parse().unwrap()
}

fn window(start: &str, end: &str) -> TimeWindow {
    TimeWindow {
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

fn booked(id: &str, start: &str, end: &str, client: &str) -> BookedSlot {
    BookedSlot {
        id: Some(id.to_string()),
        start_time: start.to_string(),
        end_time: end.to_string(),
        client_name: client.to_string(),
        client_id: None,
    }
}

pub fn seed_availability() -> AvailabilityData {
    let mut available_dates = BTreeMap::new();
    available_dates.insert(date(2024, 12, 1), window("09:00", "17:00"));
    available_dates.insert(date(2024, 12, 2), window("10:00", "18:00"));
    available_dates.insert(date(2024, 12, 3), window("09:00", "17:00"));

    let mut unavailable_dates = BTreeMap::new();
    unavailable_dates.insert(date(2024, 12, 4), window("00:00", "24:00"));
    unavailable_dates.insert(date(2024, 12, 5), window("10:00", "18:00"));

    let mut bookings = BTreeMap::new();
    bookings.insert(
        date(2024, 12, 6),
        vec![
            booked("bk1", "14:00", "16:00", "Charlie"),
            booked("bk2", "16:00", "18:00", "Bob"),
            booked("bk3", "18:00", "20:00", "Nick"),
            booked("bk4", "20:00", "22:00", "Alfred"),
        ],
    );
    bookings.insert(date(2024, 12, 7), vec![booked("bk5", "10:00", "12:00", "Uhtred")]);

    AvailabilityData {
        available_dates,
        unavailable_dates,
        bookings,
    }
}

fn occurrence(id: &str, day: NaiveDate, extras: &[(&str, f64)]) -> Occurrence {
    Occurrence {
        id: id.to_string(),
        start_date: day,
        end_date: day,
        start_time: "14:00".to_string(),
        end_time: "16:00".to_string(),
        rates: OccurrenceRates {
            base_rate: 20.0,
            additional_rates: extras
                .iter()
                .map(|(name, amount)| AdditionalRate {
                    name: name.to_string(),
                    amount: *amount,
                })
                .collect(),
            time_unit: TimeUnit::PerVisit,
        },
    }
}

fn shared_booking(id: &str, client_name: &str, status: BookingStatus) -> Booking {
    let occurrences = vec![
        occurrence("occ1", date(2024, 12, 6), &[("Weekend Fee", 5.0), ("Premium Package", 10.0)]),
        occurrence("occ2", date(2024, 12, 7), &[("Weekend Fee", 5.0)]),
    ];
    let costs = summarize_costs(&occurrences).expect("seed occurrences are well-formed");

    Booking {
        id: id.to_string(),
        status,
        client_id: None,
        professional_id: None,
        client_name: client_name.to_string(),
        professional_name: "Sarah Wilson".to_string(),
        service_type: "Dog Walking".to_string(),
        animal_type: "Dog".to_string(),
        pets: vec![seed_pets()[0].clone()],
        occurrences,
        costs,
        status_reason: None,
        created_at: ts("2024-11-30T12:00:00Z"),
        updated_at: ts("2024-11-30T12:00:00Z"),
    }
}

pub fn seed_bookings() -> HashMap<String, Booking> {
    let mut out = HashMap::new();
    for booking in [
        shared_booking("1234", "John Doe", BookingStatus::Confirmed),
        shared_booking("5678", "Margarett Laporte", BookingStatus::Cancelled),
        shared_booking("56782", "Zoe Neale", BookingStatus::Denied),
        shared_booking("5673", "Matt Aertker", BookingStatus::PendingInitialProfessionalChanges),
        shared_booking("5674", "Mark Smith", BookingStatus::PendingClientApproval),
        shared_booking("5675", "Nora Smith", BookingStatus::PendingProfessionalChanges),
        shared_booking("56712", "Lena Ortiz", BookingStatus::ConfirmedPendingProfessionalChanges),
    ] {
        out.insert(booking.id.clone(), booking);
    }
    out
}

pub fn seed_pets() -> Vec<Pet> {
    vec![
        Pet {
            id: "1".to_string(),
            name: "Max".to_string(),
            animal_type: "Dog".to_string(),
            breed: Some("border collie".to_string()),
        },
        Pet {
            id: "2".to_string(),
            name: "Whiskers".to_string(),
            animal_type: "Cat".to_string(),
            breed: Some("tabby".to_string()),
        },
        Pet {
            id: "3".to_string(),
            name: "Buddy".to_string(),
            animal_type: "Lizard".to_string(),
            breed: Some("leopard gecko".to_string()),
        },
    ]
}

fn service(name: &str, animals: &str, base: &str, extra_animal: &str, categories: &[&str]) -> Service {
    Service {
        service_name: name.to_string(),
        service_description: String::new(),
        animal_types: animals.to_string(),
        length_of_service: "1 hr".to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        rates: ServiceRates {
            base_rate: base.to_string(),
            additional_animal_rate: extra_animal.to_string(),
            holiday_rate: String::new(),
            additional_rates: vec![NamedRate {
                label: "Medication Administration".to_string(),
                value: "15".to_string(),
                description: "Oral or topical medication per visit".to_string(),
            }],
        },
    }
}

pub fn seed_services() -> Vec<Service> {
    vec![
        service("Dog Walking", "Dogs", "20", "10", &["Domestic"]),
        service("Cat Sitting", "Cats", "20", "5", &["Domestic"]),
        service("Exotic Pet Care", "Lizards, Birds", "25", "15", &["Exotic"]),
    ]
}

pub fn seed_conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: "conv_1".to_string(),
            participant1_id: CURRENT_USER_ID,
            participant2_id: 202,
            name: "Dr. Sarah Smith".to_string(),
            last_message: "I'd be happy to help! What kind of pet do you have?".to_string(),
            timestamp: ts("2024-02-21T07:05:00Z"),
            unread: false,
        },
        Conversation {
            id: "conv_2".to_string(),
            participant1_id: 203,
            participant2_id: CURRENT_USER_ID,
            name: "Dr. Mike Johnson".to_string(),
            last_message: "I'm available! Let's set up a booking".to_string(),
            timestamp: ts("2024-02-21T15:35:00Z"),
            unread: false,
        },
    ]
}

pub fn seed_messages() -> HashMap<String, Vec<Message>> {
    let mut out = HashMap::new();
    out.insert(
        "conv_1".to_string(),
        vec![
            Message {
                message_id: 1,
                conversation_id: "conv_1".to_string(),
                sender: CURRENT_USER_ID,
                content: "Hi, I'm interested in your pet sitting services".to_string(),
                timestamp: ts("2024-02-21T14:00:00Z"),
                booking_id: None,
                status: "read".to_string(),
                is_booking_request: false,
                metadata: serde_json::Value::Null,
            },
            Message {
                message_id: 2,
                conversation_id: "conv_1".to_string(),
                sender: 202,
                content: "I'd be happy to help! What kind of pet do you have?".to_string(),
                timestamp: ts("2024-02-21T14:05:00Z"),
                booking_id: None,
                status: "sent".to_string(),
                is_booking_request: false,
                metadata: serde_json::Value::Null,
            },
        ],
    );
    out
}
