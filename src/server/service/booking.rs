use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        booking::{BookingRepository, NewBooking},
        flight::FlightRepository,
        passenger::PassengerRepository,
    },
    error::{booking::BookingError, AppError},
    model::booking::{Booking, BookingStatus, CreateBookingParams},
    service::inventory::FlightInventory,
    util::seat::assign_seat,
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a seat on a flight for a passenger.
    ///
    /// The requested seat is used when given, otherwise one is assigned from the flight's
    /// inventory counter. The inventory decrement and the booking insert commit together;
    /// if either fails neither is persisted.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Confirmed booking
    /// - `Err(BookingError::FlightNotFound | PassengerNotFound)` - Unknown reference
    /// - `Err(BookingError::NoSeatsAvailable)` - Flight is sold out
    /// - `Err(AppError::SeatErr)` - Stored seat counters are inconsistent
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        let txn = self.db.begin().await?;

        let flight = FlightRepository::new(&txn)
            .find_by_id(&params.flight_id)
            .await?
            .ok_or_else(|| BookingError::FlightNotFound(params.flight_id.clone()))?;

        PassengerRepository::new(&txn)
            .find_by_id(&params.passenger_id)
            .await?
            .ok_or_else(|| BookingError::PassengerNotFound(params.passenger_id.clone()))?;

        if flight.available_seats <= 0 {
            return Err(BookingError::NoSeatsAvailable(flight.flight_id).into());
        }

        let seat_number = match params.seat_number {
            Some(seat) => seat,
            None => assign_seat(flight.total_seats, flight.available_seats)?,
        };

        FlightInventory::new(&txn).decrement(&flight.flight_id).await?;

        let booking = BookingRepository::new(&txn)
            .create(NewBooking {
                flight_id: flight.flight_id,
                passenger_id: params.passenger_id,
                seat_number,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            booking_id = %booking.booking_id,
            flight_id = %booking.flight_id,
            seat_number = %booking.seat_number,
            caller_id = %params.caller_id,
            "Created booking"
        );

        Ok(booking)
    }

    /// Gets a booking by identifier
    pub async fn get(&self, booking_id: &str) -> Result<Booking, AppError> {
        BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| BookingError::BookingNotFound(booking_id.to_string()).into())
    }

    /// Cancels a confirmed booking and returns its seat to the flight.
    ///
    /// Only `confirmed` bookings can be cancelled, so a seat is restored at most once per
    /// booking. The status change and the inventory increment commit together.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The booking, now `cancelled`
    /// - `Err(BookingError::BookingNotFound)` - Unknown booking
    /// - `Err(BookingError::InvalidBookingStatus)` - Booking is already cancelled or checked in
    pub async fn cancel(&self, booking_id: &str, caller_id: &str) -> Result<Booking, AppError> {
        let txn = self.db.begin().await?;
        let repo = BookingRepository::new(&txn);

        let mut booking = repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| BookingError::BookingNotFound(booking_id.to_string()))?;

        if booking.status != BookingStatus::Confirmed
            || !repo
                .set_status(booking_id, BookingStatus::Confirmed, BookingStatus::Cancelled)
                .await?
        {
            return Err(BookingError::InvalidBookingStatus {
                booking_id: booking.booking_id,
                status: booking.status,
            }
            .into());
        }

        FlightInventory::new(&txn).increment(&booking.flight_id).await?;

        txn.commit().await?;

        booking.status = BookingStatus::Cancelled;

        tracing::info!(
            booking_id = %booking.booking_id,
            flight_id = %booking.flight_id,
            caller_id = %caller_id,
            "Cancelled booking"
        );

        Ok(booking)
    }
}
