//! Product intake handlers
//!
//! POST /api/products — multipart product submission.
//! GET /api/products/categories — categories for the form's autocomplete.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::{error, info, warn};

use crate::auth::CurrentUser;
use crate::models::product::{
    merge_upload_outcomes, CategoriesResponse, ImageOutcome, ImageUpload, ProductSubmission,
    SubmitProductResponse,
};
use crate::models::ErrorResponse;
use crate::services::product_intake::{self, IntakeError};
use crate::AppState;

/// Create a product from a multipart form submission
///
/// Text fields: `name`, `sku` (required), `description`, `category`,
/// `size`, `color`, `fabric_type`, `care_instructions`,
/// `technical_details`, `price`. File parts: `product_images` (0..N).
///
/// Responds 201 with the new product id and a per-file outcome for every
/// uploaded image; 422 on validation failure, 409 on a duplicate SKU.
pub async fn create_product(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SubmitProductResponse>), (StatusCode, Json<ErrorResponse>)> {
    let mut input = ProductSubmission::default();
    let mut uploads: Vec<ImageUpload> = Vec::new();
    // Files that failed in transit are reported but never reach the store;
    // each keeps its submission position so the outcome list stays in order
    let mut transport_failures: Vec<(usize, ImageOutcome)> = Vec::new();
    let mut file_position = 0usize;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "product_images" | "product_images[]" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                match field.bytes().await {
                    Ok(bytes) => uploads.push(ImageUpload {
                        file_name,
                        bytes: bytes.to_vec(),
                    }),
                    Err(e) => {
                        warn!(file = %file_name, error = %e, "Image upload failed in transit");
                        transport_failures.push((
                            file_position,
                            ImageOutcome::failed(file_name, format!("upload error: {}", e)),
                        ));
                    }
                }
                file_position += 1;
            }
            _ => {
                let value = field.text().await.map_err(bad_multipart)?;
                match field_name.as_str() {
                    "name" => input.name = value,
                    "sku" => input.sku = value,
                    "description" => input.description = Some(value),
                    "category" => input.category = Some(value),
                    "size" => input.size = Some(value),
                    "color" => input.color = Some(value),
                    "fabric_type" => input.fabric_type = Some(value),
                    "care_instructions" => input.care_instructions = Some(value),
                    "technical_details" => input.technical_details = Some(value),
                    // Absent or unparseable price means no initial pricing
                    "price" => input.price = value.trim().parse().unwrap_or(0.0),
                    other => {
                        warn!(field = other, "Ignoring unknown form field");
                    }
                }
            }
        }
    }

    info!(sku = %input.sku, uploads = uploads.len(), user_id = user.id, "Product submission received");

    let submitted = product_intake::submit_product(
        &state.db,
        state.images.as_ref(),
        input,
        uploads,
        user.id,
    )
    .await
    .map_err(|e| {
        let status = match &e {
            IntakeError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            IntakeError::DuplicateSku(_) => StatusCode::CONFLICT,
            IntakeError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %e, "Product submission failed");
        } else {
            warn!(error = %e, "Product submission rejected");
        }
        (status, Json(ErrorResponse::new(e.kind(), e.to_string())))
    })?;

    let images = merge_upload_outcomes(submitted.images, transport_failures);

    Ok((
        StatusCode::CREATED,
        Json(SubmitProductResponse {
            product_id: submitted.product_id,
            message: "Product added successfully".to_string(),
            images,
        }),
    ))
}

/// Existing product categories for autocomplete
///
/// GET /api/products/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let categories = product_intake::list_categories(&state.db).await.map_err(|e| {
        error!(error = %e, "Failed to list categories");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("database", format!("Database error: {}", e))),
        )
    })?;

    Ok(Json(CategoriesResponse { categories }))
}

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> (StatusCode, Json<ErrorResponse>) {
    warn!(error = %e, "Malformed multipart request");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(
            "bad_request",
            format!("invalid multipart body: {}", e),
        )),
    )
}
