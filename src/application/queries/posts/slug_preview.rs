use super::PostQueryService;
use crate::{
    application::{dto::SlugPreviewDto, error::ApplicationResult},
    domain::post::{PostId, PostTitle},
};

/// The slug a title would receive right now. Nothing is reserved, so a
/// later save may still end up with a different suffix.
pub struct SlugPreviewQuery {
    pub title: String,
    pub exclude_id: Option<i64>,
}

impl PostQueryService {
    pub async fn preview_slug(&self, query: SlugPreviewQuery) -> ApplicationResult<SlugPreviewDto> {
        let title = PostTitle::new(query.title)?;
        let exclude = query.exclude_id.map(PostId::new).transpose()?;
        let slug = self
            .slug_service
            .generate_unique_slug(&title, exclude)
            .await?;
        Ok(SlugPreviewDto {
            slug: slug.into_inner(),
        })
    }
}
