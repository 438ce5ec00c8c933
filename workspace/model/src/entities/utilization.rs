use sea_orm::entity::prelude::*;

/// Fact table: one utilization observation per (date, department, system,
/// time). usage_date and usage_time are denormalized onto the fact so the
/// filter endpoint can sort on them without touching dim_date.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fact_utilization")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date_key: i32,
    pub dept_id: i32,
    pub system_id: i32,
    pub utilization_pct: f64,
    pub usage_date: Date,
    pub usage_time: Time,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::system::Entity",
        from = "Column::SystemId",
        to = "super::system::Column::SystemId"
    )]
    System,
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DeptId",
        to = "super::department::Column::DeptId"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::date_dim::Entity",
        from = "Column::DateKey",
        to = "super::date_dim::Column::DateKey"
    )]
    DateDim,
}

impl Related<super::system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::System.def()
    }
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::date_dim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DateDim.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
