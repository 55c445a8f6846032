pub mod api_client;
pub mod auth_api;
pub mod availability_api;
pub mod booking_api;
pub mod catalog_api;
pub mod geocoding;
pub mod message_api;
