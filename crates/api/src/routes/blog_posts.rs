//! Route definitions for the blog.
//!
//! ```text
//! GET    /blog-posts       -> list_blog_posts (newest first)
//! POST   /blog-posts       -> create_blog_post
//! GET    /blog-posts/{key} -> get_blog_post (lookup by slug)
//! DELETE /blog-posts/{key} -> delete_blog_post (lookup by id)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::blog_posts;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/blog-posts",
            get(blog_posts::list_blog_posts).post(blog_posts::create_blog_post),
        )
        .route(
            "/blog-posts/{key}",
            get(blog_posts::get_blog_post).delete(blog_posts::delete_blog_post),
        )
}
