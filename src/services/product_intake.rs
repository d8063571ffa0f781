//! Product intake: one atomic submission
//!
//! Persists the product, its specification, the optional initial price
//! record, image rows, and the audit entry inside a single transaction.
//! Per-file storage failures are isolated: the offending image is skipped
//! and reported, the transaction carries on.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::{info, warn};

use crate::entities::{price_records, product_images, product_specifications, products, prelude::Products};
use crate::models::product::{ImageOutcome, ImageUpload, ProductSubmission};
use crate::services::activity_log::record_activity;
use crate::services::image_store::{unique_file_name, ImageStore};

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// Required field missing; nothing was persisted
    #[error("{0}")]
    Validation(String),
    /// SKU already taken; detected before any write
    #[error("a product with SKU '{0}' already exists")]
    DuplicateSku(String),
    /// Failure inside the transaction; every row was rolled back
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

impl IntakeError {
    /// Stable discriminator for API clients
    pub fn kind(&self) -> &'static str {
        match self {
            IntakeError::Validation(_) => "validation",
            IntakeError::DuplicateSku(_) => "conflict",
            IntakeError::Db(_) => "database",
        }
    }
}

#[derive(Debug)]
pub struct SubmittedProduct {
    pub product_id: i32,
    /// Per-file outcome for every upload passed in, in submission order
    pub images: Vec<ImageOutcome>,
}

pub async fn submit_product(
    db: &DatabaseConnection,
    images: &dyn ImageStore,
    input: ProductSubmission,
    uploads: Vec<ImageUpload>,
    user_id: i32,
) -> Result<SubmittedProduct, IntakeError> {
    input.validate().map_err(IntakeError::Validation)?;

    let name = input.name.trim().to_string();
    let sku = input.sku.trim().to_string();

    // Existence check before the transaction; the unique index on sku is
    // the backstop for a racing duplicate, which fails the insert below.
    let taken = Products::find()
        .filter(products::Column::Sku.eq(sku.as_str()))
        .count(db)
        .await?;
    if taken > 0 {
        return Err(IntakeError::DuplicateSku(sku));
    }

    // An uncommitted transaction rolls back when dropped, so every `?`
    // below discards all rows written so far.
    let txn = db.begin().await?;

    let product = products::ActiveModel {
        name: Set(name.clone()),
        description: Set(blank_to_none(input.description)),
        sku: Set(sku.clone()),
        category: Set(blank_to_none(input.category)),
        created_by: Set(user_id),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    // Specification row always exists 1:1 with the product, even when
    // every field was left blank.
    product_specifications::ActiveModel {
        product_id: Set(product.id),
        size: Set(blank_to_none(input.size)),
        color: Set(blank_to_none(input.color)),
        fabric_type: Set(blank_to_none(input.fabric_type)),
        care_instructions: Set(blank_to_none(input.care_instructions)),
        technical_details: Set(blank_to_none(input.technical_details)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    if input.price > 0.0 {
        price_records::ActiveModel {
            product_id: Set(product.id),
            price: Set(input.price),
            effective_from: Set(Utc::now().date_naive()),
            changed_by: Set(user_id),
            reason: Set(Some("Initial pricing".to_string())),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    let mut outcomes = Vec::with_capacity(uploads.len());
    for (index, upload) in uploads.into_iter().enumerate() {
        let stored_name = unique_file_name(&sku, &upload.file_name);
        match images.store(&stored_name, &upload.bytes).await {
            Ok(path) => {
                product_images::ActiveModel {
                    product_id: Set(product.id),
                    image_path: Set(path.clone()),
                    // The first file in submission order is the primary image
                    is_primary: Set(index == 0),
                    sort_order: Set(index as i32),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                outcomes.push(ImageOutcome::stored(upload.file_name, path));
            }
            Err(e) => {
                warn!(
                    sku = %sku,
                    file = %upload.file_name,
                    error = %e,
                    "Skipping product image that failed to store"
                );
                outcomes.push(ImageOutcome::failed(upload.file_name, e.to_string()));
            }
        }
    }

    record_activity(
        &txn,
        user_id,
        "create",
        "products",
        &format!("Created product '{}' (SKU {})", name, sku),
        Some(product.id),
    )
    .await?;

    txn.commit().await?;

    info!(
        product_id = product.id,
        sku = %sku,
        images = outcomes.iter().filter(|o| o.stored).count(),
        "Product created"
    );

    Ok(SubmittedProduct {
        product_id: product.id,
        images: outcomes,
    })
}

/// Distinct non-empty product categories, for the intake form autocomplete
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    Products::find()
        .select_only()
        .column(products::Column::Category)
        .filter(products::Column::Category.is_not_null())
        .filter(products::Column::Category.ne(""))
        .distinct()
        .order_by_asc(products::Column::Category)
        .into_tuple::<String>()
        .all(db)
        .await
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
