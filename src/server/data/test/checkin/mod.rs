use crate::server::{
    data::checkin::CheckinRepository,
    model::checkin::{BoardingGroup, CreateCheckinRecordParams},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
