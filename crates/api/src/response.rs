//! Shared response envelope types for API handlers.
//!
//! Successful responses use a `{ "success": true, ... }` envelope with the
//! payload fields flattened alongside the flag. Use [`SuccessResponse`]
//! instead of ad-hoc `serde_json::json!` to get compile-time type safety
//! and consistent serialization.

use serde::Serialize;

/// Standard `{ "success": true, ...payload }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(SuccessResponse::new(PromptPayload { prompt })))
/// ```
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}
