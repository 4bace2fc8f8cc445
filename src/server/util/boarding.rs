use chrono::{DateTime, Utc};

use crate::server::{
    error::seat::SeatError, model::checkin::BoardingGroup, util::seat::seat_row,
};

/// Derives the boarding group from a seat label.
///
/// Rows 1-10 board in group `A`, rows 11-30 in group `B` and every later row in group `C`.
///
/// # Returns
/// - `Ok(BoardingGroup)` - Group for the seat's row
/// - `Err(SeatError::InvalidSeatFormat)` - Label could not be parsed
pub fn boarding_group(seat_label: &str) -> Result<BoardingGroup, SeatError> {
    let row = seat_row(seat_label)?;

    let group = match row {
        0..=10 => BoardingGroup::A,
        11..=30 => BoardingGroup::B,
        _ => BoardingGroup::C,
    };

    Ok(group)
}

/// Builds the boarding pass number `{flight_id}-{booking prefix}-{YYYYMMDDHHMMSS}`.
///
/// The booking prefix is the first 8 characters of the booking id.
pub fn boarding_pass_number(flight_id: &str, booking_id: &str, at: DateTime<Utc>) -> String {
    let booking_prefix: String = booking_id.chars().take(8).collect();

    format!(
        "{}-{}-{}",
        flight_id,
        booking_prefix,
        at.format("%Y%m%d%H%M%S")
    )
}
