use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A booking row carries a status string outside the known lifecycle states.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown booking status '{0}' in storage")]
    UnknownBookingStatus(String),

    /// A check-in row carries a boarding group other than A, B or C.
    #[error("Unknown boarding group '{0}' in storage")]
    UnknownBoardingGroup(String),
}
