use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CheckinRequestDto {
    pub booking_id: String,
    pub passenger_id: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BoardingPassDto {
    pub checkin_id: String,
    pub boarding_pass_number: String,
    pub flight_id: String,
    pub seat_number: String,
    pub boarding_group: String,
    pub gate_number: Option<String>,
    pub checkin_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CheckinStatusDto {
    pub booking_id: String,
    pub checked_in: bool,
    pub checkin_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}
