//! SeaORM Entity for products
//!
//! One row per catalog product; SKU is globally unique.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Stock keeping unit, unique across all products
    pub sku: String,
    /// Free-text category, fed back to the intake form for autocomplete
    pub category: Option<String>,
    /// User id of the submitter
    pub created_by: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::product_specifications::Entity")]
    Specification,
    #[sea_orm(has_many = "super::product_images::Entity")]
    Images,
    #[sea_orm(has_many = "super::price_records::Entity")]
    PriceRecords,
}

impl Related<super::product_specifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specification.def()
    }
}

impl Related<super::product_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl Related<super::price_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PriceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
