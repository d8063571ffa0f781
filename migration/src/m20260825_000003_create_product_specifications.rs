use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Exactly one specification row per product, written in the same
        // transaction as the product itself.
        manager
            .create_table(
                Table::create()
                    .table(ProductSpecifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductSpecifications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProductSpecifications::ProductId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ProductSpecifications::Size)
                            .string_len(64)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProductSpecifications::Color)
                            .string_len(64)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProductSpecifications::FabricType)
                            .string_len(128)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProductSpecifications::CareInstructions)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProductSpecifications::TechnicalDetails)
                            .text()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_specifications_product")
                            .from(
                                ProductSpecifications::Table,
                                ProductSpecifications::ProductId,
                            )
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ProductSpecifications::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum ProductSpecifications {
    Table,
    Id,
    ProductId,
    Size,
    Color,
    FabricType,
    CareInstructions,
    TechnicalDetails,
}

#[derive(Iden)]
enum Products {
    Table,
    Id,
}
