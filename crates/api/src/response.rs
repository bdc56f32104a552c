//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` response body, used by operations that
/// have no entity payload (e.g. blog post deletion).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
