mod service;

pub use service::{DEFAULT_UPCOMING_LIMIT, EventQueryService, GetEventQuery, ListUpcomingEventsQuery};
