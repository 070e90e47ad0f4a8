// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::post::{
        PostId, PostReadRepository, PostSlug, PostWriteRepository, services::PostSlugService,
        slug::is_valid_slug,
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        slug_service: Arc<PostSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }

    /// Caller-supplied slugs are used verbatim: they must already be valid
    /// and must not belong to another post.
    pub(super) async fn resolve_custom_slug(
        &self,
        raw: &str,
        exclude: Option<PostId>,
    ) -> ApplicationResult<PostSlug> {
        let raw = raw.trim();
        if !is_valid_slug(raw) {
            return Err(ApplicationError::validation(format!(
                "invalid slug '{raw}': use lowercase letters, digits and single hyphens"
            )));
        }

        let slug = PostSlug::new(raw)?;
        if self.read_repo.slug_exists(&slug, exclude).await? {
            return Err(ApplicationError::conflict(format!(
                "slug '{slug}' is already in use"
            )));
        }
        Ok(slug)
    }
}

pub(super) fn normalize_excerpt(excerpt: Option<String>) -> Option<String> {
    excerpt
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
