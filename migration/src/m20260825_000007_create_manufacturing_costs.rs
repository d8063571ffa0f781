use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ManufacturingCosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ManufacturingCosts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ManufacturingCosts::BatchId)
                            .integer()
                            .not_null(),
                    )
                    // labor / overhead / electricity / maintenance / other
                    .col(
                        ColumnDef::new(ManufacturingCosts::CostType)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ManufacturingCosts::Amount)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ManufacturingCosts::RecordedDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ManufacturingCosts::Description).text().null())
                    .col(
                        ColumnDef::new(ManufacturingCosts::RecordedBy)
                            .integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_manufacturing_costs_batch")
                            .from(ManufacturingCosts::Table, ManufacturingCosts::BatchId)
                            .to(ManufacturingBatches::Table, ManufacturingBatches::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_manufacturing_costs_recorded_by")
                            .from(ManufacturingCosts::Table, ManufacturingCosts::RecordedBy)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_manufacturing_costs_batch_id")
                    .table(ManufacturingCosts::Table)
                    .col(ManufacturingCosts::BatchId)
                    .to_owned(),
            )
            .await?;

        // The report orders and range-filters on recorded_date
        manager
            .create_index(
                Index::create()
                    .name("idx_manufacturing_costs_recorded_date")
                    .table(ManufacturingCosts::Table)
                    .col(ManufacturingCosts::RecordedDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ManufacturingCosts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ManufacturingCosts {
    Table,
    Id,
    BatchId,
    CostType,
    Amount,
    RecordedDate,
    Description,
    RecordedBy,
}

#[derive(Iden)]
enum ManufacturingBatches {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
