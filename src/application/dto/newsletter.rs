use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EventDto, PostDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterDigestDto {
    #[serde(default)]
    pub featured_post: Option<PostDto>,
    pub upcoming_events: Vec<EventDto>,
    pub timezone: String,
    #[serde(with = "serde_time")]
    pub generated_at: DateTime<Utc>,
}
