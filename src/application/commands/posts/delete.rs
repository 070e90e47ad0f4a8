use super::PostCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let id = PostId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        self.write_repo.delete(id).await?;
        tracing::info!(post_id = %id, "post deleted");
        Ok(())
    }
}
