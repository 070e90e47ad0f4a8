// src/domain/post/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::slug::FALLBACK_SLUG;
use crate::domain::post::value_objects::{PostId, PostSlug, PostTitle};

/// Domain service responsible for producing unique slugs for posts.
///
/// Candidates are probed one at a time; the service never writes.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl PostSlugService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub fn generate_slug(&self, title: &PostTitle) -> DomainResult<PostSlug> {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            PostSlug::new(FALLBACK_SLUG)
        } else {
            PostSlug::new(base)
        }
    }

    /// Returns `base` when free, otherwise the first free `base-N` for
    /// N = 2, 3, ... There is no upper bound on N.
    pub async fn ensure_unique_slug(
        &self,
        base: &PostSlug,
        exclude_id: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        if !self.read_repo.slug_exists(base, exclude_id).await? {
            return Ok(base.clone());
        }

        let mut counter = 2u64;
        loop {
            let candidate = base.with_suffix(counter);
            if !self.read_repo.slug_exists(&candidate, exclude_id).await? {
                tracing::debug!(base = %base, slug = %candidate, "resolved slug collision");
                return Ok(candidate);
            }
            counter += 1;
        }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &PostTitle,
        exclude_id: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        let base = self.generate_slug(title)?;
        self.ensure_unique_slug(&base, exclude_id).await
    }

    /// Keeps `current` when present so existing links stay stable.
    pub async fn update_slug_if_needed(
        &self,
        post_id: PostId,
        new_title: &PostTitle,
        current: Option<&PostSlug>,
    ) -> DomainResult<PostSlug> {
        match current {
            Some(slug) => Ok(slug.clone()),
            None => self.generate_unique_slug(new_title, Some(post_id)).await,
        }
    }
}
