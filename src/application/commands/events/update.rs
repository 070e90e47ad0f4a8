use super::{
    EventCommandService,
    service::{normalize_text, optional_local},
};
use crate::{
    application::{
        dto::EventDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::event::{EventId, EventSchedule},
};

/// Absent fields are left as they are; `Some("")` clears the optional
/// text fields and the end time.
#[derive(Default)]
pub struct UpdateEventCommand {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at_local: Option<String>,
    pub ends_at_local: Option<String>,
}

impl EventCommandService {
    pub async fn update_event(&self, command: UpdateEventCommand) -> ApplicationResult<EventDto> {
        let id = EventId::new(command.id)?;
        let mut event = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("event not found"))?;

        if let Some(title) = command.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(ApplicationError::validation("event title cannot be empty"));
            }
            event.title = title.to_string();
        }
        if let Some(description) = command.description {
            event.description = normalize_text(Some(description));
        }
        if let Some(location) = command.location {
            event.location = normalize_text(Some(location));
        }

        if command.starts_at_local.is_some() || command.ends_at_local.is_some() {
            let starts_at = match command.starts_at_local.as_deref() {
                Some(value) => self.local_to_utc(value)?,
                None => event.schedule.starts_at(),
            };
            let ends_at = match command.ends_at_local {
                Some(value) => optional_local(Some(&value))
                    .map(|value| self.local_to_utc(value))
                    .transpose()?,
                None => event.schedule.ends_at(),
            };
            event.schedule = EventSchedule::new(starts_at, ends_at)?;
        }

        event.updated_at = self.clock.now();
        let updated = self.repo.update(event).await?;
        Ok(EventDto::from_event(updated, &self.timezone))
    }
}
