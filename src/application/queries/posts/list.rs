use super::PostQueryService;
use crate::application::{dto::PostDto, error::ApplicationResult};

pub const DEFAULT_LIST_LIMIT: u32 = 20;
pub const MAX_LIST_LIMIT: u32 = 100;

pub struct ListPostsQuery {
    pub limit: u32,
}

impl Default for ListPostsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Vec<PostDto>> {
        let limit = query.limit.clamp(1, MAX_LIST_LIMIT);
        let posts = self.read_repo.list_published(limit).await?;
        Ok(posts.into_iter().map(PostDto::from).collect())
    }
}
