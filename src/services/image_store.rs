//! Durable storage for uploaded product images
//!
//! Files are written under `{root}/products/` with a collision-resistant
//! name derived from the SKU. The trait seam lets tests substitute a
//! failing store to exercise the per-file error path.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const PRODUCT_DIR: &str = "products";

/// Formats accepted for product images
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

#[derive(Debug, thiserror::Error)]
pub enum ImageStoreError {
    #[error("unsupported image format '{0}'")]
    UnsupportedFormat(String),
    #[error("empty upload")]
    EmptyUpload,
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store `bytes` under `file_name` and return the stored relative path
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, ImageStoreError>;
}

/// Filesystem-backed store rooted at the configured upload directory
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(root.join(PRODUCT_DIR))?;
        Ok(Self { root })
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, ImageStoreError> {
        if bytes.is_empty() {
            return Err(ImageStoreError::EmptyUpload);
        }
        let ext = file_name.rsplit_once('.').map(|(_, e)| e).unwrap_or("");
        if !ALLOWED_EXTENSIONS.contains(&ext) {
            return Err(ImageStoreError::UnsupportedFormat(ext.to_string()));
        }

        tokio::fs::write(self.root.join(PRODUCT_DIR).join(file_name), bytes).await?;
        Ok(format!("{}/{}", PRODUCT_DIR, file_name))
    }
}

/// Derive a collision-resistant stored file name: SKU, a unique suffix, and
/// the original extension (lowercased; defaults to jpg when absent).
pub fn unique_file_name(sku: &str, original_name: &str) -> String {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("jpg")
        .to_lowercase();
    format!("{}_{}.{}", sanitize_sku(sku), Uuid::new_v4().simple(), ext)
}

// SKUs end up in file names; anything outside [A-Za-z0-9_-] is replaced.
fn sanitize_sku(sku: &str) -> String {
    sku.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
