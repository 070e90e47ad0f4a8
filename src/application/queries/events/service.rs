// src/application/queries/events/service.rs
use std::sync::Arc;

use chrono_tz::Tz;

use crate::{
    application::{
        dto::EventDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::event::{EventId, EventRepository},
};

pub const DEFAULT_UPCOMING_LIMIT: u32 = 20;
const MAX_UPCOMING_LIMIT: u32 = 100;

pub struct GetEventQuery {
    pub id: i64,
}

pub struct ListUpcomingEventsQuery {
    pub limit: u32,
}

pub struct EventQueryService {
    repo: Arc<dyn EventRepository>,
    clock: Arc<dyn Clock>,
    timezone: Tz,
}

impl EventQueryService {
    pub fn new(repo: Arc<dyn EventRepository>, clock: Arc<dyn Clock>, timezone: Tz) -> Self {
        Self {
            repo,
            clock,
            timezone,
        }
    }

    pub async fn get_event(&self, query: GetEventQuery) -> ApplicationResult<EventDto> {
        let id = EventId::new(query.id)?;
        let event = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("event not found"))?;
        Ok(EventDto::from_event(event, &self.timezone))
    }

    pub async fn list_upcoming_events(
        &self,
        query: ListUpcomingEventsQuery,
    ) -> ApplicationResult<Vec<EventDto>> {
        let limit = query.limit.clamp(1, MAX_UPCOMING_LIMIT);
        let events = self.repo.list_upcoming(self.clock.now(), limit).await?;
        Ok(events
            .into_iter()
            .map(|event| EventDto::from_event(event, &self.timezone))
            .collect())
    }
}
