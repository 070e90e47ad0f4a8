// src/application/queries/posts/mod.rs
mod get_by_id;
mod get_by_slug;
mod list;
mod service;
mod slug_preview;

pub use get_by_id::GetPostQuery;
pub use get_by_slug::GetPostBySlugQuery;
pub use list::{DEFAULT_LIST_LIMIT, ListPostsQuery, MAX_LIST_LIMIT};
pub use service::PostQueryService;
pub use slug_preview::SlugPreviewQuery;
