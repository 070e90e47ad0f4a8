use std::sync::Arc;

use crate::domain::post::{PostReadRepository, services::PostSlugService};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
}

impl PostQueryService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, slug_service: Arc<PostSlugService>) -> Self {
        Self {
            read_repo,
            slug_service,
        }
    }
}
