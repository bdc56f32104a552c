//! Route table.

pub mod blog_posts;
pub mod health;
pub mod palm_reading;

use axum::Router;

use crate::state::AppState;

/// All API routes, intended to be nested under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(palm_reading::router())
        .merge(blog_posts::router())
}
