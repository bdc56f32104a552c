//! Volatile in-process storage.
//!
//! Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
//! shared across the application. State lives for the lifetime of the
//! process and is lost on shutdown.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use palmlens_core::error::CoreError;
use palmlens_core::types::EntityId;

use crate::models::{
    BlogPost, CreateBlogPost, CreatePalmReading, CreateUser, PalmReading, User,
};
use crate::Storage;

/// In-memory [`Storage`] implementation backed by keyed maps.
#[derive(Default)]
pub struct MemStorage {
    users: RwLock<HashMap<EntityId, User>>,
    readings: RwLock<HashMap<EntityId, PalmReading>>,
    posts: RwLock<HashMap<EntityId, BlogPost>>,
}

impl MemStorage {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn new_id() -> EntityId {
    Uuid::new_v4().to_string()
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_user(&self, data: CreateUser) -> Result<User, CoreError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == data.username) {
            return Err(CoreError::Conflict(format!(
                "username '{}' is already taken",
                data.username
            )));
        }

        let user = User {
            id: new_id(),
            username: data.username,
            password: data.password,
        };
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>, CoreError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, CoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_palm_reading(
        &self,
        data: CreatePalmReading,
    ) -> Result<PalmReading, CoreError> {
        let reading = PalmReading {
            id: new_id(),
            image_url: data.image_url,
            birth_date: data.birth_date,
            love_score: data.love_score,
            money_score: data.money_score,
            health_score: data.health_score,
            love_reading: data.love_reading,
            money_reading: data.money_reading,
            health_reading: data.health_reading,
            features: data.features,
            advice: data.advice,
            today_fortune: data.today_fortune,
            new_year_fortune: data.new_year_fortune,
            mbti_prediction: data.mbti_prediction,
            created_at: chrono::Utc::now(),
        };
        self.readings
            .write()
            .await
            .insert(reading.id.clone(), reading.clone());
        Ok(reading)
    }

    async fn get_palm_reading(&self, id: &str) -> Result<Option<PalmReading>, CoreError> {
        Ok(self.readings.read().await.get(id).cloned())
    }

    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, CoreError> {
        let mut posts: Vec<BlogPost> = self.posts.read().await.values().cloned().collect();
        // Newest first; id as tiebreaker so the order is total.
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(posts)
    }

    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, CoreError> {
        Ok(self
            .posts
            .read()
            .await
            .values()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn create_blog_post(&self, data: CreateBlogPost) -> Result<BlogPost, CoreError> {
        let mut posts = self.posts.write().await;

        if posts.values().any(|p| p.slug == data.slug) {
            return Err(CoreError::Conflict(format!(
                "a blog post with slug '{}' already exists",
                data.slug
            )));
        }

        let now = chrono::Utc::now();
        let post = BlogPost {
            id: new_id(),
            title: data.title,
            slug: data.slug,
            content: data.content,
            excerpt: data.excerpt,
            image_url: data.image_url,
            author: data.author,
            category: data.category,
            published: data.published,
            created_at: now,
            updated_at: now,
        };
        posts.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn delete_blog_post(&self, id: &str) -> Result<bool, CoreError> {
        Ok(self.posts.write().await.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::models::Category;

    fn user_input(username: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            password: "secret".to_string(),
        }
    }

    fn reading_input() -> CreatePalmReading {
        CreatePalmReading {
            image_url: "/uploads/abc.png".to_string(),
            birth_date: Some("1990-06-15".to_string()),
            love_score: 85,
            money_score: 72,
            health_score: 90,
            love_reading: "love".to_string(),
            money_reading: "money".to_string(),
            health_reading: "health".to_string(),
            features: vec!["a".into(), "b".into(), "c".into()],
            advice: vec!["x".into(), "y".into(), "z".into()],
            today_fortune: Some("today".to_string()),
            new_year_fortune: Some("new year".to_string()),
            mbti_prediction: Some("type".to_string()),
        }
    }

    fn post_input(slug: &str) -> CreateBlogPost {
        CreateBlogPost {
            title: format!("Post {slug}"),
            slug: slug.to_string(),
            content: "Content\n\nwith paragraphs.".to_string(),
            excerpt: "Excerpt.".to_string(),
            image_url: None,
            author: "Mirae".to_string(),
            category: Category::Palmistry,
            published: true,
        }
    }

    #[tokio::test]
    async fn user_roundtrip_by_id_and_username() {
        let store = MemStorage::new();
        let user = store.create_user(user_input("haneul")).await.unwrap();

        let by_id = store.get_user(&user.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "haneul");

        let by_name = store
            .get_user_by_username("haneul")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_name.id, user.id);
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let store = MemStorage::new();
        store.create_user(user_input("haneul")).await.unwrap();

        let err = store.create_user(user_input("haneul")).await.unwrap_err();
        assert_matches!(err, CoreError::Conflict(_));
    }

    #[tokio::test]
    async fn palm_reading_roundtrip_assigns_id_and_timestamp() {
        let store = MemStorage::new();
        let created = store.create_palm_reading(reading_input()).await.unwrap();
        assert!(!created.id.is_empty());

        let fetched = store
            .get_palm_reading(&created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.image_url, "/uploads/abc.png");
        assert_eq!(fetched.love_score, 85);
        assert_eq!(fetched.features.len(), 3);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn absent_reading_is_none() {
        let store = MemStorage::new();
        assert!(store
            .get_palm_reading("no-such-id")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn blog_posts_are_listed_newest_first_for_any_insertion_order() {
        let store = MemStorage::new();
        // Insert out of chronological order, then backdate each post so the
        // creation timestamps are unambiguous.
        for (slug, minutes_ago) in [("middle", 10), ("oldest", 60), ("newest", 1)] {
            let post = store.create_blog_post(post_input(slug)).await.unwrap();
            store
                .posts
                .write()
                .await
                .get_mut(&post.id)
                .unwrap()
                .created_at = chrono::Utc::now() - chrono::Duration::minutes(minutes_ago);
        }

        let posts = store.list_blog_posts().await.unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn blog_post_roundtrip_by_slug_preserves_fields() {
        let store = MemStorage::new();
        let input = post_input("heart-line-guide");
        let created = store.create_blog_post(input.clone()).await.unwrap();

        let fetched = store
            .get_blog_post_by_slug("heart-line-guide")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.title, input.title);
        assert_eq!(fetched.content, input.content);
        assert_eq!(fetched.excerpt, input.excerpt);
        assert_eq!(fetched.author, input.author);
        assert_eq!(fetched.category, input.category);
        assert_eq!(fetched.published, input.published);
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_conflict() {
        let store = MemStorage::new();
        store.create_blog_post(post_input("dup")).await.unwrap();

        let err = store.create_blog_post(post_input("dup")).await.unwrap_err();
        assert_matches!(err, CoreError::Conflict(_));
    }

    #[tokio::test]
    async fn delete_reports_whether_a_post_existed() {
        let store = MemStorage::new();
        let post = store.create_blog_post(post_input("gone")).await.unwrap();

        assert!(store.delete_blog_post(&post.id).await.unwrap());
        assert!(!store.delete_blog_post(&post.id).await.unwrap());
        assert!(store
            .get_blog_post_by_slug("gone")
            .await
            .unwrap()
            .is_none());
    }
}
