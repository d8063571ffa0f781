pub mod manufacturing_cost;
pub mod product;
