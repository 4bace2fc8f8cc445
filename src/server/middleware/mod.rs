//! Request processing shared by the API controllers.

pub mod auth;
