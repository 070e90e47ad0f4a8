// src/application/commands/posts/create.rs
use super::{PostCommandService, service::normalize_excerpt};
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::{
        errors::DomainError,
        post::{NewPost, PostBody, PostSlug, PostTitle},
    },
};

/// Generated slugs can lose a race against a concurrent insert; the
/// unique constraint catches it and the whole cycle is retried.
const MAX_SLUG_ATTEMPTS: u32 = 3;

pub struct CreatePostCommand {
    pub title: String,
    pub body: String,
    pub excerpt: Option<String>,
    pub slug: Option<String>,
    pub publish: bool,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    excerpt: Option<String>,
    slug: Option<String>,
    publish: bool,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            excerpt: self.excerpt,
            slug: self.slug,
            publish: self.publish,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let body = PostBody::new(command.body)?;
        let excerpt = normalize_excerpt(command.excerpt);
        let publish = command.publish;
        let now = self.clock.now();

        let draft = |slug: PostSlug| NewPost {
            title: title.clone(),
            slug,
            body: body.clone(),
            excerpt: excerpt.clone(),
            published: publish,
            published_at: publish.then_some(now),
            created_at: now,
            updated_at: now,
        };

        if let Some(raw) = command.slug.as_deref() {
            let slug = self.resolve_custom_slug(raw, None).await?;
            let created = self.write_repo.insert(draft(slug)).await?;
            return Ok(created.into());
        }

        let mut attempt = 1;
        let created = loop {
            let slug = self.slug_service.generate_unique_slug(&title, None).await?;
            match self.write_repo.insert(draft(slug.clone())).await {
                Ok(post) => break post,
                Err(DomainError::Conflict(reason)) if attempt < MAX_SLUG_ATTEMPTS => {
                    tracing::warn!(slug = %slug, attempt, %reason, "slug taken concurrently, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        };

        tracing::info!(post_id = %created.id, slug = ?created.slug, "post created");
        Ok(created.into())
    }
}
