use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_flight_table::Flight,
    m20250301_000002_create_passenger_table::Passenger,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(string(Booking::BookingId).primary_key())
                    .col(string(Booking::FlightId))
                    .col(string(Booking::PassengerId))
                    .col(string(Booking::SeatNumber))
                    .col(string(Booking::BookingStatus).default("confirmed"))
                    .col(
                        timestamp(Booking::BookingDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_flight_id")
                            .from(Booking::Table, Booking::FlightId)
                            .to(Flight::Table, Flight::FlightId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_passenger_id")
                            .from(Booking::Table, Booking::PassengerId)
                            .to(Passenger::Table, Passenger::PassengerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_passenger_id")
                    .table(Booking::Table)
                    .col(Booking::PassengerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    BookingId,
    FlightId,
    PassengerId,
    SeatNumber,
    BookingStatus,
    BookingDate,
}
