mod booking;
mod checkin;
mod flight;
mod passenger;
