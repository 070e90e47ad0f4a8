// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for timestamps and for deciding which events are
/// still upcoming.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
