use super::EventCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::event::EventId,
};

pub struct DeleteEventCommand {
    pub id: i64,
}

impl EventCommandService {
    pub async fn delete_event(&self, command: DeleteEventCommand) -> ApplicationResult<()> {
        let id = EventId::new(command.id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("event not found"))?;
        self.repo.delete(id).await?;
        tracing::info!(event_id = %id, "event deleted");
        Ok(())
    }
}
