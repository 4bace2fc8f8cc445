//! Business logic layer.
//!
//! Services orchestrate repositories and the pure calculators in `util` to implement the
//! booking and check-in lifecycles. Each mutating operation opens its own database
//! transaction and commits it only after every step succeeded; returning early with `?`
//! drops the transaction, which rolls back every write made so far.

pub mod booking;
pub mod checkin;
pub mod flight;
pub mod inventory;
pub mod passenger;

use sea_orm::{DbErr, SqlErr};

use crate::server::error::{booking::BookingError, AppError};

#[cfg(test)]
mod test;

/// Maps a unique constraint violation to the given business error, passing other
/// database errors through.
pub(crate) fn unique_violation_as(err: DbErr, business: impl FnOnce() -> BookingError) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => business().into(),
        _ => err.into(),
    }
}

