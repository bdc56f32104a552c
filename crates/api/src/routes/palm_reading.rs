//! Route definitions for palm reading analysis.
//!
//! ```text
//! POST /palm-reading      -> analyze_palm (multipart upload)
//! GET  /palm-reading/{id} -> get_palm_reading
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::palm_reading;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/palm-reading", post(palm_reading::analyze_palm))
        .route("/palm-reading/{id}", get(palm_reading::get_palm_reading))
}
