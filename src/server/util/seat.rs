use crate::server::error::seat::SeatError;

/// Assigns the next seat on a flight from its inventory counter.
///
/// The row is `total_seats - available_seats + 1` and the column is always `A`, so the
/// first booking on an empty flight gets `1A` and the last one gets `{total_seats}A`.
/// The assignment follows the counter only; it does not consult seats already taken.
///
/// # Arguments
/// - `total_seats` - Flight capacity, must be positive
/// - `available_seats` - Seats still free, must be within `0..=total_seats`
///
/// # Returns
/// - `Ok(String)` - Seat label such as `"12A"`
/// - `Err(SeatError::InvalidCapacity)` - Counters are inconsistent
pub fn assign_seat(total_seats: i32, available_seats: i32) -> Result<String, SeatError> {
    if total_seats <= 0 || available_seats < 0 || available_seats > total_seats {
        return Err(SeatError::InvalidCapacity {
            total_seats,
            available_seats,
        });
    }

    let row = total_seats - available_seats + 1;

    Ok(format!("{}A", row))
}

/// Extracts the row number from a `<digits><letter>` seat label.
///
/// # Returns
/// - `Ok(u32)` - Row parsed from every character before the trailing letter
/// - `Err(SeatError::InvalidSeatFormat)` - Label shorter than 2 characters or the row
///   is not an integer
pub fn seat_row(seat_label: &str) -> Result<u32, SeatError> {
    let mut chars = seat_label.chars();
    if seat_label.chars().count() < 2 || chars.next_back().is_none() {
        return Err(SeatError::InvalidSeatFormat(seat_label.to_string()));
    }

    chars
        .as_str()
        .parse::<u32>()
        .map_err(|_| SeatError::InvalidSeatFormat(seat_label.to_string()))
}

/// Normalizes a caller-requested seat label.
///
/// Upper-cases and trims the label, then requires a 1-3 digit row without a leading
/// zero followed by a single column letter `A` through `F`.
pub fn normalize_seat_label(seat_label: &str) -> Result<String, SeatError> {
    let label = seat_label.trim().to_uppercase();
    let invalid = || SeatError::InvalidSeatFormat(seat_label.to_string());

    let mut chars = label.chars();
    let column = chars.next_back().ok_or_else(invalid)?;
    let row = chars.as_str();
    if !('A'..='F').contains(&column) {
        return Err(invalid());
    }
    if row.is_empty()
        || row.len() > 3
        || row.starts_with('0')
        || !row.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    Ok(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_first_row_on_empty_flight() {
        assert_eq!(assign_seat(180, 180).unwrap(), "1A");
    }

    #[test]
    fn assigns_last_row_when_one_seat_left() {
        assert_eq!(assign_seat(180, 1).unwrap(), "180A");
    }

    #[test]
    fn assigns_past_capacity_when_full() {
        // Callers check availability first; the counter itself stays well defined.
        assert_eq!(assign_seat(10, 0).unwrap(), "11A");
    }

    #[test]
    fn rejects_zero_capacity() {
        assert_eq!(
            assign_seat(0, 0),
            Err(SeatError::InvalidCapacity {
                total_seats: 0,
                available_seats: 0
            })
        );
    }

    #[test]
    fn rejects_inconsistent_counters() {
        assert!(assign_seat(10, -1).is_err());
        assert!(assign_seat(10, 11).is_err());
        assert!(assign_seat(-5, 0).is_err());
    }

    #[test]
    fn parses_seat_rows() {
        assert_eq!(seat_row("1A").unwrap(), 1);
        assert_eq!(seat_row("15C").unwrap(), 15);
        assert_eq!(seat_row("180A").unwrap(), 180);
    }

    #[test]
    fn rejects_short_or_non_numeric_labels() {
        assert_eq!(
            seat_row("A"),
            Err(SeatError::InvalidSeatFormat("A".to_string()))
        );
        assert!(seat_row("").is_err());
        assert!(seat_row("XYA").is_err());
        assert!(seat_row("1-A").is_err());
    }

    #[test]
    fn normalizes_valid_labels() {
        assert_eq!(normalize_seat_label("12a").unwrap(), "12A");
        assert_eq!(normalize_seat_label(" 3F ").unwrap(), "3F");
        assert_eq!(normalize_seat_label("100B").unwrap(), "100B");
    }

    #[test]
    fn rejects_malformed_labels() {
        for label in ["", "A", "12", "12G", "012A", "1000A", "1AA", "1Ä"] {
            assert!(
                normalize_seat_label(label).is_err(),
                "expected '{}' to be rejected",
                label
            );
        }
    }
}
