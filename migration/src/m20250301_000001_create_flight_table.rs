use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(string(Flight::FlightId).primary_key())
                    .col(string(Flight::DepartureAirport))
                    .col(string(Flight::ArrivalAirport))
                    .col(timestamp(Flight::DepartureTime))
                    .col(timestamp(Flight::ArrivalTime))
                    .col(string(Flight::AircraftType))
                    .col(integer(Flight::TotalSeats))
                    .col(integer(Flight::AvailableSeats))
                    .col(string(Flight::Status).default("scheduled"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    FlightId,
    DepartureAirport,
    ArrivalAirport,
    DepartureTime,
    ArrivalTime,
    AircraftType,
    TotalSeats,
    AvailableSeats,
    Status,
}
