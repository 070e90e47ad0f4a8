// src/infrastructure/repositories/postgres_event.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::event::{Event, EventId, EventRepository, EventSchedule, NewEvent};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const EVENT_COLUMNS: &str =
    "id, title, description, location, starts_at, ends_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRow {
    id: i64,
    title: String,
    description: Option<String>,
    location: Option<String>,
    starts_at: DateTime<Utc>,
    ends_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = DomainError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(Event {
            id: EventId::new(row.id)?,
            title: row.title,
            description: row.description,
            location: row.location,
            schedule: EventSchedule::new(row.starts_at, row.ends_at)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn insert(&self, event: NewEvent) -> DomainResult<Event> {
        let sql = format!(
            "INSERT INTO events (title, description, location, starts_at, ends_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {EVENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, EventRow>(&sql)
            .bind(event.title)
            .bind(event.description)
            .bind(event.location)
            .bind(event.schedule.starts_at())
            .bind(event.schedule.ends_at())
            .bind(event.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Event::try_from(row)
    }

    async fn update(&self, event: Event) -> DomainResult<Event> {
        let sql = format!(
            "UPDATE events
             SET title = $2, description = $3, location = $4,
                 starts_at = $5, ends_at = $6, updated_at = $7
             WHERE id = $1
             RETURNING {EVENT_COLUMNS}"
        );
        let id = event.id;
        let row = sqlx::query_as::<_, EventRow>(&sql)
            .bind(i64::from(id))
            .bind(event.title)
            .bind(event.description)
            .bind(event.location)
            .bind(event.schedule.starts_at())
            .bind(event.schedule.ends_at())
            .bind(event.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound(format!("event {id} not found")))?;

        Event::try_from(row)
    }

    async fn delete(&self, id: EventId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("event {id} not found")));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: EventId) -> DomainResult<Option<Event>> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, EventRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .map(Event::try_from)
            .transpose()
    }

    async fn list_upcoming(&self, from: DateTime<Utc>, limit: u32) -> DomainResult<Vec<Event>> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events
             WHERE starts_at >= $1
             ORDER BY starts_at ASC, id ASC
             LIMIT $2"
        );
        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .bind(from)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Event::try_from).collect()
    }
}
