//! Entity models and creation DTOs.
//!
//! Wire field names are camelCase to match the JSON contract the client
//! consumes (`imageUrl`, `loveScore`, `createdAt`, ...).

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use palmlens_core::types::{EntityId, Timestamp};

/// Lowercase URL-safe slug: `my-first-post`, `palmistry-101`.
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered user. No HTTP surface in the current flows; the entity
/// exists because the storage contract references it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub username: String,
    /// Stored as an opaque string; hashing is out of scope here.
    pub password: String,
}

/// DTO for creating a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// PalmReading
// ---------------------------------------------------------------------------

/// A persisted palm reading. Created exactly once at analysis time and
/// immutable thereafter; there is no delete operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PalmReading {
    pub id: EntityId,
    pub image_url: String,
    pub birth_date: Option<String>,
    pub love_score: i32,
    pub money_score: i32,
    pub health_score: i32,
    pub love_reading: String,
    pub money_reading: String,
    pub health_reading: String,
    pub features: Vec<String>,
    pub advice: Vec<String>,
    pub today_fortune: Option<String>,
    pub new_year_fortune: Option<String>,
    pub mbti_prediction: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for persisting a generated reading (id/timestamp assigned by
/// storage).
#[derive(Debug, Clone)]
pub struct CreatePalmReading {
    pub image_url: String,
    pub birth_date: Option<String>,
    pub love_score: i32,
    pub money_score: i32,
    pub health_score: i32,
    pub love_reading: String,
    pub money_reading: String,
    pub health_reading: String,
    pub features: Vec<String>,
    pub advice: Vec<String>,
    pub today_fortune: Option<String>,
    pub new_year_fortune: Option<String>,
    pub mbti_prediction: Option<String>,
}

// ---------------------------------------------------------------------------
// BlogPost
// ---------------------------------------------------------------------------

/// Blog post category. The set is closed; unknown tags are rejected at
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Palmistry,
    Fortune,
    Zodiac,
    Guide,
}

impl Default for Category {
    fn default() -> Self {
        Category::Palmistry
    }
}

/// A published or draft blog post. The slug is unique across all posts
/// and serves as the alternate lookup key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: EntityId,
    pub title: String,
    pub slug: String,
    /// Free text; may embed literal newlines meant for paragraph breaks.
    pub content: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub author: String,
    pub category: Category,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a blog post. The slug is computed by the caller from
/// the title.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPost {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(regex(path = *SLUG_RE, message = "slug must be lowercase and URL-safe"))]
    pub slug: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    #[validate(length(min = 1, message = "excerpt must not be empty"))]
    pub excerpt: String,
    pub image_url: Option<String>,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub published: bool,
}
