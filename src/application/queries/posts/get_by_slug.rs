use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostSlug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
    pub include_drafts: bool,
}

impl PostQueryService {
    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        // A malformed slug cannot belong to any post.
        let slug =
            PostSlug::new(query.slug).map_err(|_| ApplicationError::not_found("post not found"))?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|post| post.published || query.include_drafts)
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Ok(post.into())
    }
}
