use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PriceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PriceRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PriceRecords::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PriceRecords::Price).double().not_null())
                    .col(
                        ColumnDef::new(PriceRecords::EffectiveFrom)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PriceRecords::ChangedBy).integer().not_null())
                    .col(ColumnDef::new(PriceRecords::Reason).string_len(255).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_price_records_product")
                            .from(PriceRecords::Table, PriceRecords::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_price_records_product_id")
                    .table(PriceRecords::Table)
                    .col(PriceRecords::ProductId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PriceRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PriceRecords {
    Table,
    Id,
    ProductId,
    Price,
    EffectiveFrom,
    ChangedBy,
    Reason,
}

#[derive(Iden)]
enum Products {
    Table,
    Id,
}
