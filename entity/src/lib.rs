//! SeaORM entity definitions for the flight check-in schema.

pub mod prelude;

pub mod booking;
pub mod checkin_record;
pub mod flight;
pub mod passenger;
