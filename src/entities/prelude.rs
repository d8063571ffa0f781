pub use super::activity_logs::Entity as ActivityLogs;
pub use super::manufacturing_batches::Entity as ManufacturingBatches;
pub use super::manufacturing_costs::Entity as ManufacturingCosts;
pub use super::price_records::Entity as PriceRecords;
pub use super::product_images::Entity as ProductImages;
pub use super::product_specifications::Entity as ProductSpecifications;
pub use super::products::Entity as Products;
pub use super::users::Entity as Users;
