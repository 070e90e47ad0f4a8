pub mod events;
pub mod newsletter;
pub mod posts;
pub mod serde_time;

pub use events::EventDto;
pub use newsletter::NewsletterDigestDto;
pub use posts::{PostDto, SlugPreviewDto};
