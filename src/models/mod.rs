use serde::Serialize;

pub mod manufacturing_cost;
pub mod product;

/// Error body shared by all endpoints.
///
/// `kind` is a stable machine-readable discriminator; `error` is the
/// human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

impl ErrorResponse {
    pub fn new(kind: &'static str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            kind,
        }
    }
}
