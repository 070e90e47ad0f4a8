use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct GetPostQuery {
    pub id: i64,
    pub include_drafts: bool,
}

impl PostQueryService {
    pub async fn get_post(&self, query: GetPostQuery) -> ApplicationResult<PostDto> {
        let id = PostId::new(query.id)?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|post| post.published || query.include_drafts)
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Ok(post.into())
    }
}
