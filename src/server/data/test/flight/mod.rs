use crate::server::{data::flight::FlightRepository, model::flight::CreateFlightParams};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod adjust_available_seats;
mod create;
mod find_by_id;
mod list_all;
