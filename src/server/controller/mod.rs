//! HTTP request handlers.
//!
//! Controllers convert request DTOs into parameter types (validating input shape on the
//! way), call the matching service, and convert domain models back into response DTOs.
//! Every handler carries a `utoipa::path` annotation used to build the OpenAPI document.

pub mod booking;
pub mod checkin;
pub mod flight;
pub mod health;
pub mod passenger;
