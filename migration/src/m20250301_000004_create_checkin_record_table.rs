use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000003_create_booking_table::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CheckinRecord::Table)
                    .if_not_exists()
                    .col(string(CheckinRecord::CheckinId).primary_key())
                    .col(string(CheckinRecord::BookingId))
                    .col(
                        timestamp(CheckinRecord::CheckinTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_uniq(CheckinRecord::BoardingPassNumber))
                    .col(string_null(CheckinRecord::GateNumber))
                    .col(string(CheckinRecord::BoardingGroup))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_checkin_record_booking_id")
                            .from(CheckinRecord::Table, CheckinRecord::BookingId)
                            .to(Booking::Table, Booking::BookingId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup path for the one-record-per-booking check
        manager
            .create_index(
                Index::create()
                    .name("idx_checkin_record_booking_id")
                    .table(CheckinRecord::Table)
                    .col(CheckinRecord::BookingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CheckinRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CheckinRecord {
    Table,
    CheckinId,
    BookingId,
    CheckinTime,
    BoardingPassNumber,
    GateNumber,
    BoardingGroup,
}
