//! Wire-level DTOs exchanged with API clients.
//!
//! Request DTOs are deserialized from JSON bodies and converted into server parameter types
//! by the controllers; response DTOs are produced from domain models via `into_dto`.

pub mod api;
pub mod booking;
pub mod checkin;
pub mod flight;
pub mod passenger;
