//! Request-scoped identity
//!
//! The session layer in front of this service injects the authenticated
//! user id as the `X-User-Id` header; this middleware turns it into a
//! typed extension so handlers never read ambient state.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
    Json,
};
use tracing::warn;

use crate::models::ErrorResponse;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The acting user for the current request
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: i32,
}

/// Reject mutating requests that carry no usable identity
pub async fn require_user(
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let user_id = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i32>().ok());

    match user_id {
        Some(id) => {
            request.extensions_mut().insert(CurrentUser { id });
            Ok(next.run(request).await)
        }
        None => {
            warn!("Request without a valid {} header", USER_ID_HEADER);
            Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(
                    "unauthorized",
                    "missing or invalid X-User-Id header",
                )),
            ))
        }
    }
}
