// tests/support/mocks/events.rs
use async_trait::async_trait;
use bulletin_core::domain::errors::{DomainError, DomainResult};
use bulletin_core::domain::event::{Event, EventId, EventRepository, EventSchedule, NewEvent};
use chrono::{DateTime, Utc};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryEvents {
    events: Mutex<Vec<Event>>,
}

impl InMemoryEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, title: &str, starts_at: DateTime<Utc>) -> EventId {
        let mut events = self.events.lock().unwrap();
        let id = EventId::new(next_id(&events)).unwrap();
        events.push(Event {
            id,
            title: title.to_string(),
            description: None,
            location: None,
            schedule: EventSchedule::new(starts_at, None).unwrap(),
            created_at: super::fixed_now(),
            updated_at: super::fixed_now(),
        });
        id
    }

    pub fn get(&self, id: EventId) -> Option<Event> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|event| event.id == id)
            .cloned()
    }
}

#[async_trait]
impl EventRepository for InMemoryEvents {
    async fn insert(&self, new: NewEvent) -> DomainResult<Event> {
        let mut events = self.events.lock().unwrap();
        let event = Event {
            id: EventId::new(next_id(&events))?,
            title: new.title,
            description: new.description,
            location: new.location,
            schedule: new.schedule,
            created_at: new.created_at,
            updated_at: new.created_at,
        };
        events.push(event.clone());
        Ok(event)
    }

    async fn update(&self, event: Event) -> DomainResult<Event> {
        let mut events = self.events.lock().unwrap();
        let slot = events
            .iter_mut()
            .find(|existing| existing.id == event.id)
            .ok_or_else(|| DomainError::NotFound("event not found".into()))?;
        *slot = event.clone();
        Ok(event)
    }

    async fn delete(&self, id: EventId) -> DomainResult<()> {
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|event| event.id != id);
        if events.len() == before {
            return Err(DomainError::NotFound("event not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: EventId) -> DomainResult<Option<Event>> {
        Ok(self.get(id))
    }

    async fn list_upcoming(&self, from: DateTime<Utc>, limit: u32) -> DomainResult<Vec<Event>> {
        let mut upcoming: Vec<Event> = self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.schedule.starts_at() >= from)
            .cloned()
            .collect();
        upcoming.sort_by_key(|event| (event.schedule.starts_at(), i64::from(event.id)));
        upcoming.truncate(limit as usize);
        Ok(upcoming)
    }
}

fn next_id(events: &[Event]) -> i64 {
    events.iter().map(|event| i64::from(event.id)).max().unwrap_or(0) + 1
}
