//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a flight, a passenger and a confirmed booking linking them.
///
/// All entities are created with default values. The flight's available seat count is
/// left at its factory default; it is not decremented for the inserted booking.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((flight, passenger, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::flight::Model,
        entity::passenger::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let flight = crate::factory::flight::create_flight(db).await?;
    let passenger = crate::factory::passenger::create_passenger(db).await?;
    let booking =
        crate::factory::booking::create_booking(db, &flight.flight_id, &passenger.passenger_id)
            .await?;

    Ok((flight, passenger, booking))
}
