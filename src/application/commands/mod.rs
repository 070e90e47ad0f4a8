pub mod events;
pub mod posts;
