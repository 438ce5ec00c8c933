use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create dim_system table
        manager
            .create_table(
                Table::create()
                    .table(DimSystem::Table)
                    .if_not_exists()
                    .col(pk_auto(DimSystem::SystemId))
                    .col(string(DimSystem::SystemName).unique_key())
                    .to_owned(),
            )
            .await?;

        // Create dim_department table
        manager
            .create_table(
                Table::create()
                    .table(DimDepartment::Table)
                    .if_not_exists()
                    .col(pk_auto(DimDepartment::DeptId))
                    .col(string(DimDepartment::DepartmentName).unique_key())
                    .to_owned(),
            )
            .await?;

        // Create dim_date table. The importer looks up rows by usage_date,
        // so only that column carries a unique constraint.
        manager
            .create_table(
                Table::create()
                    .table(DimDate::Table)
                    .if_not_exists()
                    .col(pk_auto(DimDate::DateKey))
                    .col(date(DimDate::UsageDate).unique_key())
                    .col(time(DimDate::UsageTime))
                    .col(integer(DimDate::Year))
                    .col(integer(DimDate::Month))
                    .col(integer(DimDate::Day))
                    .col(integer(DimDate::Hour))
                    .to_owned(),
            )
            .await?;

        // Create fact_utilization table
        manager
            .create_table(
                Table::create()
                    .table(FactUtilization::Table)
                    .if_not_exists()
                    .col(pk_auto(FactUtilization::Id))
                    .col(integer(FactUtilization::DateKey))
                    .col(integer(FactUtilization::DeptId))
                    .col(integer(FactUtilization::SystemId))
                    .col(double(FactUtilization::UtilizationPct))
                    .col(date(FactUtilization::UsageDate))
                    .col(time(FactUtilization::UsageTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fact_utilization_date")
                            .from(FactUtilization::Table, FactUtilization::DateKey)
                            .to(DimDate::Table, DimDate::DateKey)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fact_utilization_department")
                            .from(FactUtilization::Table, FactUtilization::DeptId)
                            .to(DimDepartment::Table, DimDepartment::DeptId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fact_utilization_system")
                            .from(FactUtilization::Table, FactUtilization::SystemId)
                            .to(DimSystem::Table, DimSystem::SystemId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One observation per (date, department, system, time).
        manager
            .create_index(
                Index::create()
                    .name("uq_fact_utilization_observation")
                    .table(FactUtilization::Table)
                    .col(FactUtilization::DateKey)
                    .col(FactUtilization::DeptId)
                    .col(FactUtilization::SystemId)
                    .col(FactUtilization::UsageTime)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FactUtilization::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DimDate::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DimDepartment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DimSystem::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum DimSystem {
    Table,
    SystemId,
    SystemName,
}

#[derive(DeriveIden)]
enum DimDepartment {
    Table,
    DeptId,
    DepartmentName,
}

#[derive(DeriveIden)]
enum DimDate {
    Table,
    DateKey,
    UsageDate,
    UsageTime,
    Year,
    Month,
    Day,
    Hour,
}

#[derive(DeriveIden)]
enum FactUtilization {
    Table,
    Id,
    DateKey,
    DeptId,
    SystemId,
    UtilizationPct,
    UsageDate,
    UsageTime,
}
