use sea_orm::entity::prelude::*;

/// A monitored system, one row per distinct system name.
/// Populated by the CSV importer and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dim_system")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub system_id: i32,
    #[sea_orm(unique)]
    pub system_name: String,
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
