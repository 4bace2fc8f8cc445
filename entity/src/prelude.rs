pub use super::booking::Entity as Booking;
pub use super::checkin_record::Entity as CheckinRecord;
pub use super::flight::Entity as Flight;
pub use super::passenger::Entity as Passenger;
