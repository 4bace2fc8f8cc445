use crate::server::{
    data::booking::{BookingRepository, NewBooking},
    model::booking::BookingStatus,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod find_with_flight;
mod set_status;
