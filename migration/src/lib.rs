pub use sea_orm_migration::prelude::*;

mod m20260825_000001_create_users;
mod m20260825_000002_create_products;
mod m20260825_000003_create_product_specifications;
mod m20260825_000004_create_price_records;
mod m20260825_000005_create_product_images;
mod m20260825_000006_create_manufacturing_batches;
mod m20260825_000007_create_manufacturing_costs;
mod m20260825_000008_create_activity_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260825_000001_create_users::Migration),
            Box::new(m20260825_000002_create_products::Migration),
            Box::new(m20260825_000003_create_product_specifications::Migration),
            Box::new(m20260825_000004_create_price_records::Migration),
            Box::new(m20260825_000005_create_product_images::Migration),
            Box::new(m20260825_000006_create_manufacturing_batches::Migration),
            Box::new(m20260825_000007_create_manufacturing_costs::Migration),
            Box::new(m20260825_000008_create_activity_logs::Migration),
        ]
    }
}
