use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{booking::BookingRepository, checkin::CheckinRepository},
    error::{booking::BookingError, AppError},
    model::{
        booking::BookingStatus,
        checkin::{
            BoardingPass, CheckinParams, CheckinStatus, CreateCheckinRecordParams, DEFAULT_GATE,
        },
    },
    util::{
        boarding::{boarding_group, boarding_pass_number},
        checkin_window::validate_window,
    },
};

pub struct CheckinService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CheckinService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a passenger in for their booking at the current time.
    ///
    /// See [`CheckinService::checkin_at`].
    pub async fn checkin(&self, params: CheckinParams) -> Result<BoardingPass, AppError> {
        self.checkin_at(params, Utc::now()).await
    }

    /// Checks a passenger in for their booking as of `now`.
    ///
    /// Checks run in this order: the booking exists, it belongs to the passenger, it has
    /// not been checked in, it is still confirmed, and `now` is inside the check-in window.
    /// The check-in record insert and the status change commit together.
    ///
    /// # Returns
    /// - `Ok(BoardingPass)` - Boarding pass for the new check-in
    /// - `Err(BookingError::BookingNotFound)` - Unknown booking
    /// - `Err(BookingError::PassengerMismatch)` - Passenger does not own the booking
    /// - `Err(BookingError::AlreadyCheckedIn)` - Booking was checked in before
    /// - `Err(BookingError::InvalidBookingStatus)` - Booking was cancelled
    /// - `Err(BookingError::CheckinWindow)` - Outside the check-in window
    /// - `Err(AppError::SeatErr)` - Stored seat label cannot be parsed
    pub async fn checkin_at(
        &self,
        params: CheckinParams,
        now: DateTime<Utc>,
    ) -> Result<BoardingPass, AppError> {
        let txn = self.db.begin().await?;
        let booking_repo = BookingRepository::new(&txn);
        let checkin_repo = CheckinRepository::new(&txn);

        let (booking, flight) = booking_repo
            .find_with_flight(&params.booking_id)
            .await?
            .ok_or_else(|| BookingError::BookingNotFound(params.booking_id.clone()))?;

        if booking.passenger_id != params.passenger_id {
            return Err(BookingError::PassengerMismatch {
                booking_id: booking.booking_id,
                passenger_id: params.passenger_id,
            }
            .into());
        }

        if checkin_repo
            .find_by_booking(&booking.booking_id)
            .await?
            .is_some()
        {
            return Err(BookingError::AlreadyCheckedIn(booking.booking_id).into());
        }

        match booking.status {
            BookingStatus::Confirmed => {}
            BookingStatus::CheckedIn => {
                return Err(BookingError::AlreadyCheckedIn(booking.booking_id).into())
            }
            status @ BookingStatus::Cancelled => {
                return Err(BookingError::InvalidBookingStatus {
                    booking_id: booking.booking_id,
                    status,
                }
                .into())
            }
        }

        let window = validate_window(flight.departure_time, now);
        if !window.is_open() {
            return Err(BookingError::CheckinWindow(window.reason().to_string()).into());
        }

        let group = boarding_group(&booking.seat_number)?;
        let record = checkin_repo
            .create(CreateCheckinRecordParams {
                booking_id: booking.booking_id.clone(),
                boarding_pass_number: boarding_pass_number(
                    &flight.flight_id,
                    &booking.booking_id,
                    now,
                ),
                gate_number: Some(DEFAULT_GATE.to_string()),
                boarding_group: group,
                checkin_time: now,
            })
            .await?;

        // Another check-in may have moved the booking on since it was read.
        if !booking_repo
            .set_status(
                &booking.booking_id,
                BookingStatus::Confirmed,
                BookingStatus::CheckedIn,
            )
            .await?
        {
            return Err(BookingError::AlreadyCheckedIn(booking.booking_id).into());
        }

        txn.commit().await?;

        tracing::info!(
            booking_id = %booking.booking_id,
            checkin_id = %record.checkin_id,
            boarding_group = %record.boarding_group,
            caller_id = %params.caller_id,
            "Checked in booking"
        );

        Ok(BoardingPass::new(
            record,
            flight.flight_id,
            booking.seat_number,
        ))
    }

    /// Gets the boarding pass issued by a check-in
    pub async fn get_boarding_pass(&self, checkin_id: &str) -> Result<BoardingPass, AppError> {
        let (record, booking, flight) = CheckinRepository::new(self.db)
            .find_with_booking_and_flight(checkin_id)
            .await?
            .ok_or_else(|| BookingError::CheckinNotFound(checkin_id.to_string()))?;

        Ok(BoardingPass::new(record, flight.flight_id, booking.seat_number))
    }

    /// Reports whether a booking has been checked in.
    ///
    /// An unknown booking simply reports `checked_in = false`.
    pub async fn get_status(&self, booking_id: &str) -> Result<CheckinStatus, AppError> {
        let record = CheckinRepository::new(self.db)
            .find_by_booking(booking_id)
            .await?;

        Ok(CheckinStatus {
            booking_id: booking_id.to_string(),
            checked_in: record.is_some(),
            checkin_id: record.map(|r| r.checkin_id),
            timestamp: Utc::now(),
        })
    }
}
