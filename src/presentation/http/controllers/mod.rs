pub mod events;
pub mod newsletter;
pub mod posts;
