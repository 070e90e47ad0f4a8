// src/application/queries/newsletter/mod.rs
//! Assembles the digest payload (featured post plus upcoming events).
//! Delivery is handled elsewhere.

use std::sync::Arc;

use chrono_tz::Tz;

use crate::{
    application::{
        dto::{EventDto, NewsletterDigestDto, PostDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        event::EventRepository,
        post::{Post, PostReadRepository, PostSlug},
    },
};

pub const DEFAULT_DIGEST_EVENTS: u32 = 5;
const MAX_DIGEST_EVENTS: u32 = 20;

#[derive(Default)]
pub struct DigestQuery {
    /// Falls back to the most recently published post when absent.
    pub featured_slug: Option<String>,
    pub event_limit: Option<u32>,
}

pub struct NewsletterQueryService {
    post_repo: Arc<dyn PostReadRepository>,
    event_repo: Arc<dyn EventRepository>,
    clock: Arc<dyn Clock>,
    timezone: Tz,
}

impl NewsletterQueryService {
    pub fn new(
        post_repo: Arc<dyn PostReadRepository>,
        event_repo: Arc<dyn EventRepository>,
        clock: Arc<dyn Clock>,
        timezone: Tz,
    ) -> Self {
        Self {
            post_repo,
            event_repo,
            clock,
            timezone,
        }
    }

    pub async fn build_digest(&self, query: DigestQuery) -> ApplicationResult<NewsletterDigestDto> {
        let now = self.clock.now();
        let featured = self.featured_post(query.featured_slug).await?;

        let limit = query
            .event_limit
            .unwrap_or(DEFAULT_DIGEST_EVENTS)
            .clamp(1, MAX_DIGEST_EVENTS);
        let events = self.event_repo.list_upcoming(now, limit).await?;

        tracing::debug!(
            featured = featured.is_some(),
            events = events.len(),
            "newsletter digest assembled"
        );

        Ok(NewsletterDigestDto {
            featured_post: featured.map(PostDto::from),
            upcoming_events: events
                .into_iter()
                .map(|event| EventDto::from_event(event, &self.timezone))
                .collect(),
            timezone: self.timezone.name().to_string(),
            generated_at: now,
        })
    }

    async fn featured_post(&self, slug: Option<String>) -> ApplicationResult<Option<Post>> {
        match slug {
            Some(raw) => {
                let slug = PostSlug::new(raw)
                    .map_err(|_| ApplicationError::not_found("featured post not found"))?;
                let post = self
                    .post_repo
                    .find_by_slug(&slug)
                    .await?
                    .filter(|post| post.published)
                    .ok_or_else(|| ApplicationError::not_found("featured post not found"))?;
                Ok(Some(post))
            }
            None => Ok(self.post_repo.list_published(1).await?.into_iter().next()),
        }
    }
}
