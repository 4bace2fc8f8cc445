use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBookingDto {
    pub flight_id: String,
    pub passenger_id: String,
    /// Requested seat such as `12A`; assigned automatically when omitted.
    #[serde(default)]
    pub seat_number: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub booking_id: String,
    pub flight_id: String,
    pub passenger_id: String,
    pub seat_number: String,
    /// One of `confirmed`, `cancelled` or `checked_in`.
    pub booking_status: String,
    pub booking_date: DateTime<Utc>,
}
