use sea_orm::entity::prelude::*;

/// A department that operates systems, one row per distinct name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dim_department")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub dept_id: i32,
    #[sea_orm(unique)]
    pub department_name: String,
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
