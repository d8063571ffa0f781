use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Batches are created by the production module; the cost report only
        // joins against them for the batch number.
        manager
            .create_table(
                Table::create()
                    .table(ManufacturingBatches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ManufacturingBatches::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ManufacturingBatches::BatchNumber)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ManufacturingBatches::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum ManufacturingBatches {
    Table,
    Id,
    BatchNumber,
}
