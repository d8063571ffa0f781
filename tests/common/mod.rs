use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection, DbErr,
};

use fabworks_backend::entities::{manufacturing_batches, manufacturing_costs, users};

/// Set up a fresh in-memory database with the full schema applied.
/// A single pooled connection keeps the in-memory store alive and shared.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1).min_connections(1);
    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

#[allow(dead_code)]
pub async fn seed_user(db: &DatabaseConnection, username: &str, full_name: &str) -> i32 {
    users::ActiveModel {
        username: Set(username.to_string()),
        full_name: Set(full_name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed user")
    .id
}

#[allow(dead_code)]
pub async fn seed_batch(db: &DatabaseConnection, batch_number: &str) -> i32 {
    manufacturing_batches::ActiveModel {
        batch_number: Set(batch_number.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed batch")
    .id
}

#[allow(dead_code)]
pub async fn seed_cost(
    db: &DatabaseConnection,
    batch_id: i32,
    cost_type: &str,
    amount: f64,
    recorded_date: NaiveDate,
    recorded_by: Option<i32>,
) -> i32 {
    manufacturing_costs::ActiveModel {
        batch_id: Set(batch_id),
        cost_type: Set(cost_type.to_string()),
        amount: Set(amount),
        recorded_date: Set(recorded_date),
        description: Set(None),
        recorded_by: Set(recorded_by),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed cost entry")
    .id
}
