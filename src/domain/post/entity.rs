// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PostBody, PostId, PostSlug, PostTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    /// `None` only for rows imported without one.
    pub slug: Option<PostSlug>,
    pub body: PostBody,
    pub excerpt: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published = true;
        self.published_at = Some(now);
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.published = false;
        self.published_at = None;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: PostSlug, now: DateTime<Utc>) {
        self.slug = Some(slug);
        self.updated_at = now;
    }

    pub fn set_content(&mut self, title: PostTitle, body: PostBody, now: DateTime<Utc>) {
        self.title = title;
        self.body = body;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub body: PostBody,
    pub excerpt: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<PostSlug>,
    pub body: Option<PostBody>,
    pub excerpt: Option<Option<String>>,
    pub publish_state: Option<PublishStateUpdate>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            body: None,
            excerpt: None,
            publish_state: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_body(mut self, body: PostBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_excerpt(mut self, excerpt: Option<String>) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_publish_state(
        mut self,
        published: bool,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            published,
            published_at,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.body.is_none()
            && self.excerpt.is_none()
            && self.publish_state.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_post() -> Post {
        let now = Utc::now();
        Post {
            id: PostId::new(1).unwrap(),
            title: PostTitle::new("title").unwrap(),
            slug: Some(PostSlug::new("title").unwrap()),
            body: PostBody::new("body").unwrap(),
            excerpt: None,
            published: false,
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn publish_then_unpublish() {
        let mut post = sample_post();
        let now = Utc::now();
        post.publish(now);
        assert!(post.published);
        assert_eq!(post.published_at, Some(now));

        let later = now + Duration::seconds(30);
        post.unpublish(later);
        assert!(!post.published);
        assert!(post.published_at.is_none());
        assert_eq!(post.updated_at, later);
    }

    #[test]
    fn empty_update_detected() {
        let post = sample_post();
        let update = PostUpdate::new(post.id, post.updated_at);
        assert!(update.is_empty());
        assert!(!update.with_excerpt(None).is_empty());
    }
}
