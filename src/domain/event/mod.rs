// src/domain/event/mod.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(i64);

impl EventId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("event id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<EventId> for i64 {
    fn from(value: EventId) -> Self {
        value.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Start and optional end of an event, both absolute instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSchedule {
    starts_at: DateTime<Utc>,
    ends_at: Option<DateTime<Utc>>,
}

impl EventSchedule {
    pub fn new(starts_at: DateTime<Utc>, ends_at: Option<DateTime<Utc>>) -> DomainResult<Self> {
        if let Some(end) = ends_at {
            if end < starts_at {
                return Err(DomainError::Validation(
                    "event cannot end before it starts".into(),
                ));
            }
        }
        Ok(Self { starts_at, ends_at })
    }

    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        self.ends_at
    }
}

#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub schedule: EventSchedule,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub schedule: EventSchedule,
    pub created_at: DateTime<Utc>,
}

impl NewEvent {
    pub fn new(
        title: impl Into<String>,
        schedule: EventSchedule,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::Validation("event title cannot be empty".into()));
        }
        Ok(Self {
            title,
            description: None,
            location: None,
            schedule,
            created_at,
        })
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert(&self, event: NewEvent) -> DomainResult<Event>;
    /// Replaces every mutable field of the stored event.
    async fn update(&self, event: Event) -> DomainResult<Event>;
    async fn delete(&self, id: EventId) -> DomainResult<()>;
    async fn find_by_id(&self, id: EventId) -> DomainResult<Option<Event>>;
    /// Events starting at or after `from`, soonest first.
    async fn list_upcoming(&self, from: DateTime<Utc>, limit: u32) -> DomainResult<Vec<Event>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn schedule_rejects_end_before_start() {
        let start = Utc.with_ymd_and_hms(2025, 6, 15, 17, 30, 0).unwrap();
        assert!(EventSchedule::new(start, Some(start - Duration::minutes(1))).is_err());
        assert!(EventSchedule::new(start, Some(start)).is_ok());
        assert!(EventSchedule::new(start, None).is_ok());
    }

    #[test]
    fn new_event_requires_title() {
        let start = Utc.with_ymd_and_hms(2025, 6, 15, 17, 30, 0).unwrap();
        let schedule = EventSchedule::new(start, None).unwrap();
        assert!(NewEvent::new("  ", schedule, start).is_err());
        let event = NewEvent::new("Meetup", schedule, start)
            .unwrap()
            .with_location(Some("Lisboa".into()));
        assert_eq!(event.location.as_deref(), Some("Lisboa"));
    }
}
