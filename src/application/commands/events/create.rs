use super::{EventCommandService, service::normalize_text};
use crate::{
    application::{dto::EventDto, error::ApplicationResult},
    domain::event::NewEvent,
};

pub struct CreateEventCommand {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// `yyyy-MM-ddTHH:mm` in the events timezone.
    pub starts_at_local: String,
    pub ends_at_local: Option<String>,
}

impl EventCommandService {
    pub async fn create_event(&self, command: CreateEventCommand) -> ApplicationResult<EventDto> {
        let schedule =
            self.schedule_from_local(&command.starts_at_local, command.ends_at_local.as_deref())?;
        let event = NewEvent::new(command.title.trim(), schedule, self.clock.now())?
            .with_description(normalize_text(command.description))
            .with_location(normalize_text(command.location));

        let created = self.repo.insert(event).await?;
        tracing::info!(event_id = %created.id, starts_at = %created.schedule.starts_at(), "event created");
        Ok(EventDto::from_event(created, &self.timezone))
    }
}
