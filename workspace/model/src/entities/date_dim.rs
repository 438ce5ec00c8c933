use sea_orm::entity::prelude::*;

/// Date dimension. One row per distinct usage date, keyed by the date the
/// importer first saw; the broken-out year/month/day/hour fields come from
/// the source timestamp.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dim_date")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub date_key: i32,
    #[sea_orm(unique)]
    pub usage_date: Date,
    pub usage_time: Time,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::utilization::Entity")]
    Utilization,
}

impl Related<super::utilization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utilization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
