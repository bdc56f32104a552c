//! Keyed entity storage for users, palm readings, and blog posts.
//!
//! [`Storage`] is the injection seam: handlers hold an `Arc<dyn Storage>`
//! created at startup, and a database-backed implementation can replace
//! [`memory::MemStorage`] without touching the HTTP layer. Identifier and
//! timestamp assignment belongs to the storage, never to callers.

pub mod memory;
pub mod models;

use async_trait::async_trait;
use palmlens_core::error::CoreError;

use crate::models::{
    BlogPost, CreateBlogPost, CreatePalmReading, CreateUser, PalmReading, User,
};

/// Storage contract for the three entity kinds.
///
/// All mutating operations assign identifiers and timestamps; callers
/// receive owned copies and never mutate stored entities in place. No
/// operation spans multiple entity kinds.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Create a user. Fails with [`CoreError::Conflict`] if the username
    /// is already taken.
    async fn create_user(&self, data: CreateUser) -> Result<User, CoreError>;

    async fn get_user(&self, id: &str) -> Result<Option<User>, CoreError>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, CoreError>;

    /// Persist a generated reading, assigning its id and creation
    /// timestamp. Never fails for well-formed input.
    async fn create_palm_reading(
        &self,
        data: CreatePalmReading,
    ) -> Result<PalmReading, CoreError>;

    async fn get_palm_reading(&self, id: &str) -> Result<Option<PalmReading>, CoreError>;

    /// All blog posts, sorted by creation timestamp descending (most
    /// recent first). The ordering is a hard contract.
    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, CoreError>;

    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, CoreError>;

    /// Create a blog post. Fails with [`CoreError::Conflict`] if the slug
    /// collides with an existing post.
    async fn create_blog_post(&self, data: CreateBlogPost) -> Result<BlogPost, CoreError>;

    /// Delete a blog post by id, returning whether a post existed and was
    /// removed.
    async fn delete_blog_post(&self, id: &str) -> Result<bool, CoreError>;
}
