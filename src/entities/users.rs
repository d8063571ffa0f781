//! SeaORM Entity for users (owned by the auth service; joined for names)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub full_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::manufacturing_costs::Entity")]
    RecordedCosts,
}

impl Related<super::manufacturing_costs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecordedCosts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
