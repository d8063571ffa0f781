//! SeaORM Entity for manufacturing batches (read-only here)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "manufacturing_batches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub batch_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::manufacturing_costs::Entity")]
    Costs,
}

impl Related<super::manufacturing_costs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Costs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
