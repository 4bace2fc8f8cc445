//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs, which is where input shape validation
//! and normalization happen.

pub mod booking;
pub mod checkin;
pub mod flight;
pub mod passenger;
