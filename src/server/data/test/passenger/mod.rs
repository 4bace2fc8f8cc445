use crate::server::{
    data::passenger::PassengerRepository, model::passenger::CreatePassengerParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod list_bookings;
