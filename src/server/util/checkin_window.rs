//! Check-in window rules.
//!
//! Check-in opens 24 hours before the scheduled departure and closes 1 hour before it.
//! Both boundaries are inclusive.

use chrono::{DateTime, Duration, Utc};

/// How long before departure check-in opens.
pub const OPENS_BEFORE_DEPARTURE_HOURS: i64 = 24;
/// How long before departure check-in closes.
pub const CLOSES_BEFORE_DEPARTURE_HOURS: i64 = 1;

/// Outcome of validating a check-in time against a departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckinWindow {
    Open,
    /// More than 24 hours remain before departure.
    TooEarly,
    /// Less than 1 hour remains, including departures in the past.
    TooLate,
}

impl CheckinWindow {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Human-readable reason for a closed window, empty when open.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Open => "",
            Self::TooEarly => "Check-in opens 24 hours before departure",
            Self::TooLate => "Check-in closes 1 hour before departure",
        }
    }
}

/// Validates whether check-in is allowed at `now` for a flight departing at `departure_time`.
///
/// Compares the exact remaining duration rather than whole hours, so fractional hours
/// are honoured on both sides of the window.
pub fn validate_window(departure_time: DateTime<Utc>, now: DateTime<Utc>) -> CheckinWindow {
    let until_departure = departure_time - now;

    if until_departure > Duration::hours(OPENS_BEFORE_DEPARTURE_HOURS) {
        CheckinWindow::TooEarly
    } else if until_departure < Duration::hours(CLOSES_BEFORE_DEPARTURE_HOURS) {
        CheckinWindow::TooLate
    } else {
        CheckinWindow::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_at(until_departure: Duration) -> CheckinWindow {
        let now = Utc::now();
        validate_window(now + until_departure, now)
    }

    #[test]
    fn open_inside_window() {
        assert_eq!(window_at(Duration::hours(12)), CheckinWindow::Open);
        assert_eq!(window_at(Duration::minutes(90)), CheckinWindow::Open);
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert!(window_at(Duration::hours(24)).is_open());
        assert!(window_at(Duration::hours(1)).is_open());
    }

    #[test]
    fn too_early_just_past_24_hours() {
        let window = window_at(Duration::hours(24) + Duration::seconds(1));

        assert_eq!(window, CheckinWindow::TooEarly);
        assert!(window.reason().contains("24 hours before departure"));
    }

    #[test]
    fn too_late_inside_last_hour() {
        let window = window_at(Duration::minutes(59));

        assert_eq!(window, CheckinWindow::TooLate);
        assert!(window.reason().contains("1 hour before departure"));
    }

    #[test]
    fn too_late_after_departure() {
        assert_eq!(window_at(Duration::hours(-3)), CheckinWindow::TooLate);
    }

    #[test]
    fn open_window_has_no_reason() {
        assert_eq!(CheckinWindow::Open.reason(), "");
    }
}
