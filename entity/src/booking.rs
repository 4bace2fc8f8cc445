use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub booking_id: String,
    pub flight_id: String,
    pub passenger_id: String,
    pub seat_number: String,
    pub booking_status: String,
    pub booking_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::FlightId",
        to = "super::flight::Column::FlightId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Flight,
    #[sea_orm(
        belongs_to = "super::passenger::Entity",
        from = "Column::PassengerId",
        to = "super::passenger::Column::PassengerId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Passenger,
    #[sea_orm(has_one = "super::checkin_record::Entity")]
    CheckinRecord,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl Related<super::passenger::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Passenger.def()
    }
}

impl Related<super::checkin_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CheckinRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
