//! Handlers for blog post CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use palmlens_core::error::CoreError;
use palmlens_storage::models::CreateBlogPost;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/blog-posts
///
/// All posts, newest first.
pub async fn list_blog_posts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let posts = state.storage.list_blog_posts().await?;

    Ok(Json(posts))
}

/// GET /api/blog-posts/{slug}
pub async fn get_blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let post = state
        .storage
        .get_blog_post_by_slug(&slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Blog post",
            id: slug,
        }))?;

    Ok(Json(post))
}

/// POST /api/blog-posts
pub async fn create_blog_post(
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let post = state.storage.create_blog_post(input).await?;

    tracing::info!(post_id = %post.id, slug = %post.slug, "Blog post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// DELETE /api/blog-posts/{id}
pub async fn delete_blog_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !state.storage.delete_blog_post(&id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Blog post",
            id,
        }));
    }

    tracing::info!(post_id = %id, "Blog post deleted");

    Ok(Json(MessageResponse {
        message: "Blog post deleted successfully",
    }))
}
