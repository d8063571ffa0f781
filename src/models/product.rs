//! Product intake request/response models
//!
//! Models for the POST /api/products endpoint (multipart form) and the
//! category autocomplete listing.

use serde::Serialize;

/// Typed product submission, assembled from the multipart form fields.
#[derive(Debug, Clone, Default)]
pub struct ProductSubmission {
    /// Display name (required)
    pub name: String,
    /// Stock keeping unit (required, globally unique)
    pub sku: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub fabric_type: Option<String>,
    pub care_instructions: Option<String>,
    pub technical_details: Option<String>,
    /// Initial price; 0.0 means "no initial pricing" and writes no record
    pub price: f64,
}

impl ProductSubmission {
    /// Validate required fields before any persistence is attempted
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name is required".to_string());
        }
        if self.sku.trim().is_empty() {
            return Err("SKU is required".to_string());
        }
        Ok(())
    }
}

/// One uploaded image file, in submission order.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original client-side file name (used for the extension)
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Per-file result of an image upload.
///
/// Storage failures never abort the product submission; each file's fate is
/// reported back instead of being silently dropped.
#[derive(Debug, Clone, Serialize)]
pub struct ImageOutcome {
    /// Original client-side file name
    pub file_name: String,
    pub stored: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImageOutcome {
    pub fn stored(file_name: impl Into<String>, image_path: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            stored: true,
            image_path: Some(image_path.into()),
            error: None,
        }
    }

    pub fn failed(file_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            stored: false,
            image_path: None,
            error: Some(error.into()),
        }
    }
}

/// Re-insert failures recorded before storage (e.g. a file that broke in
/// transit) at their original submission positions, so the outcome list
/// matches the order the files were uploaded in.
///
/// `failed` must be in ascending position order, which is how the handler
/// collects it.
pub fn merge_upload_outcomes(
    stored: Vec<ImageOutcome>,
    failed: Vec<(usize, ImageOutcome)>,
) -> Vec<ImageOutcome> {
    let mut outcomes = stored;
    for (position, outcome) in failed {
        let at = position.min(outcomes.len());
        outcomes.insert(at, outcome);
    }
    outcomes
}

#[derive(Debug, Serialize)]
pub struct SubmitProductResponse {
    pub product_id: i32,
    pub message: String,
    pub images: Vec<ImageOutcome>,
}

/// Existing categories for the intake form's autocomplete field
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_name() {
        let submission = ProductSubmission {
            name: "   ".to_string(),
            sku: "SH-001".to_string(),
            ..Default::default()
        };
        assert!(submission.validate().is_err());
    }

    #[test]
    fn test_validate_requires_sku() {
        let submission = ProductSubmission {
            name: "Cotton Shirt".to_string(),
            sku: String::new(),
            ..Default::default()
        };
        assert!(submission.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_minimal_submission() {
        let submission = ProductSubmission {
            name: "Cotton Shirt".to_string(),
            sku: "SH-001".to_string(),
            ..Default::default()
        };
        assert!(submission.validate().is_ok());
    }

    fn file_names(outcomes: &[ImageOutcome]) -> Vec<&str> {
        outcomes.iter().map(|o| o.file_name.as_str()).collect()
    }

    #[test]
    fn test_merge_upload_outcomes_keeps_submission_order() {
        // Second of three files failed before storage
        let stored = vec![
            ImageOutcome::stored("a.png", "products/a.png"),
            ImageOutcome::stored("c.png", "products/c.png"),
        ];
        let failed = vec![(1, ImageOutcome::failed("b.png", "upload error"))];
        let merged = merge_upload_outcomes(stored, failed);
        assert_eq!(file_names(&merged), vec!["a.png", "b.png", "c.png"]);
        assert!(!merged[1].stored);
    }

    #[test]
    fn test_merge_upload_outcomes_leading_and_trailing_failures() {
        let stored = vec![ImageOutcome::stored("b.png", "products/b.png")];
        let failed = vec![
            (0, ImageOutcome::failed("a.png", "upload error")),
            (2, ImageOutcome::failed("c.png", "upload error")),
        ];
        let merged = merge_upload_outcomes(stored, failed);
        assert_eq!(file_names(&merged), vec!["a.png", "b.png", "c.png"]);
        assert!(!merged[0].stored);
        assert!(merged[1].stored);
        assert!(!merged[2].stored);
    }

    #[test]
    fn test_merge_upload_outcomes_no_failures() {
        let stored = vec![ImageOutcome::stored("a.png", "products/a.png")];
        let merged = merge_upload_outcomes(stored, Vec::new());
        assert_eq!(file_names(&merged), vec!["a.png"]);
    }
}
