//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly through SeaORM, bypassing
//! the service layer, so inventory counters are only what the factory sets.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let flight = factory::create_flight(&db).await?;
//!     let passenger = factory::create_passenger(&db).await?;
//!
//!     // Create with all dependencies
//!     let (flight, passenger, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let flight = factory::flight::FlightFactory::new(&db)
//!     .total_seats(10)
//!     .available_seats(0)
//!     .departure_time(Utc::now() + Duration::hours(30))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `flight` - Create flight entities
//! - `passenger` - Create passenger entities
//! - `booking` - Create booking entities
//! - `checkin_record` - Create check-in record entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod booking;
pub mod checkin_record;
pub mod flight;
pub mod helpers;
pub mod passenger;

pub use booking::create_booking;
pub use checkin_record::create_checkin_record;
pub use flight::create_flight;
pub use passenger::create_passenger;
