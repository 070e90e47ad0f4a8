use crate::application::datetime::{format_storage, utc_to_local_input};
use crate::domain::event::Event;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::serde_time;

/// Event as exposed to clients. `*_local` fields are ready to populate
/// a `datetime-local` input in `timezone`; the others are UTC storage
/// strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub starts_at: String,
    pub starts_at_local: String,
    #[serde(default)]
    pub ends_at: Option<String>,
    #[serde(default)]
    pub ends_at_local: Option<String>,
    pub timezone: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl EventDto {
    pub fn from_event(event: Event, tz: &Tz) -> Self {
        let starts_at = event.schedule.starts_at();
        let ends_at = event.schedule.ends_at();
        Self {
            id: event.id.into(),
            title: event.title,
            description: event.description,
            location: event.location,
            starts_at: format_storage(starts_at),
            starts_at_local: utc_to_local_input(starts_at, tz),
            ends_at: ends_at.map(format_storage),
            ends_at_local: ends_at.map(|end| utc_to_local_input(end, tz)),
            timezone: tz.name().to_string(),
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}
