//! Append-only activity audit trail
//!
//! Generic over the connection so an entry can join the caller's
//! transaction and roll back with it.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DbErr};

use crate::entities::activity_logs;

pub async fn record_activity<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    action_type: &str,
    module: &str,
    description: &str,
    entity_id: Option<i32>,
) -> Result<(), DbErr> {
    activity_logs::ActiveModel {
        user_id: Set(user_id),
        action_type: Set(action_type.to_string()),
        module: Set(module.to_string()),
        description: Set(description.to_string()),
        entity_id: Set(entity_id),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(())
}
