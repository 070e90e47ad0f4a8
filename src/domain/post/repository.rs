use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{PostId, PostSlug};
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the slug is already taken.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;
    /// Whether any post other than `exclude` already uses `slug`.
    async fn slug_exists(&self, slug: &PostSlug, exclude: Option<PostId>) -> DomainResult<bool>;
    /// Published posts, newest `published_at` first.
    async fn list_published(&self, limit: u32) -> DomainResult<Vec<Post>>;
}
