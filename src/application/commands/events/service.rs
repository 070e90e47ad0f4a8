use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::{
    application::{
        datetime::{naive_string_to_tz_date_string, parse_instant},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::event::{EventRepository, EventSchedule},
};

/// Event writes. Form values arrive as naive `datetime-local` strings and
/// are interpreted in the configured events timezone.
pub struct EventCommandService {
    pub(super) repo: Arc<dyn EventRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) timezone: Tz,
}

impl EventCommandService {
    pub fn new(repo: Arc<dyn EventRepository>, clock: Arc<dyn Clock>, timezone: Tz) -> Self {
        Self {
            repo,
            clock,
            timezone,
        }
    }

    pub(super) fn schedule_from_local(
        &self,
        starts_at_local: &str,
        ends_at_local: Option<&str>,
    ) -> ApplicationResult<EventSchedule> {
        let starts_at = self.local_to_utc(starts_at_local)?;
        let ends_at = optional_local(ends_at_local)
            .map(|value| self.local_to_utc(value))
            .transpose()?;
        Ok(EventSchedule::new(starts_at, ends_at)?)
    }

    /// Form value in the events timezone to the stored UTC instant.
    pub(super) fn local_to_utc(&self, naive: &str) -> ApplicationResult<DateTime<Utc>> {
        let stored = naive_string_to_tz_date_string(naive, self.timezone.name())?;
        Ok(parse_instant(&stored)?.with_timezone(&Utc))
    }
}

pub(super) fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A blank `datetime-local` field submits `""`, meaning "no value".
pub(super) fn optional_local(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
