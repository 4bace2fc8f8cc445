//! Pure business calculators and input normalization.
//!
//! Nothing in this module touches the database. Seat assignment, boarding group and
//! boarding pass derivation, and the check-in window are deterministic functions of
//! their inputs so they can be tested without storage.

pub mod boarding;
pub mod checkin_window;
pub mod seat;
pub mod validate;
