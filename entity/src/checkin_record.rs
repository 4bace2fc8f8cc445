use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "checkin_record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub checkin_id: String,
    pub booking_id: String,
    pub checkin_time: DateTimeUtc,
    #[sea_orm(unique)]
    pub boarding_pass_number: String,
    pub gate_number: Option<String>,
    pub boarding_group: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::BookingId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Booking,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
