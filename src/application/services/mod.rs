// src/application/services/mod.rs
use std::sync::Arc;

use chrono_tz::Tz;

use crate::{
    application::{
        commands::{events::EventCommandService, posts::PostCommandService},
        ports::{time::Clock, util::SlugGenerator},
        queries::{
            events::EventQueryService, newsletter::NewsletterQueryService,
            posts::PostQueryService,
        },
    },
    domain::{
        event::EventRepository,
        post::{PostReadRepository, PostWriteRepository, services::PostSlugService},
    },
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub event_commands: Arc<EventCommandService>,
    pub event_queries: Arc<EventQueryService>,
    pub newsletter: Arc<NewsletterQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        event_repo: Arc<dyn EventRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        events_timezone: Tz,
    ) -> Self {
        let slug_service = Arc::new(PostSlugService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&slugger),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&slug_service),
        ));

        let event_commands = Arc::new(EventCommandService::new(
            Arc::clone(&event_repo),
            Arc::clone(&clock),
            events_timezone,
        ));
        let event_queries = Arc::new(EventQueryService::new(
            Arc::clone(&event_repo),
            Arc::clone(&clock),
            events_timezone,
        ));

        let newsletter = Arc::new(NewsletterQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&event_repo),
            Arc::clone(&clock),
            events_timezone,
        ));

        Self {
            post_commands,
            post_queries,
            event_commands,
            event_queries,
            newsletter,
        }
    }
}
