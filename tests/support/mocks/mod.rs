pub mod events;
pub mod posts;
pub mod time;

pub use events::InMemoryEvents;
pub use posts::InMemoryPosts;
pub use time::{FixedClock, fixed_now};
