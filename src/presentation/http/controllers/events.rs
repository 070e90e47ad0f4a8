// src/presentation/http/controllers/events.rs
use crate::application::{
    commands::events::{CreateEventCommand, DeleteEventCommand, UpdateEventCommand},
    dto::EventDto,
    queries::events::{DEFAULT_UPCOMING_LIMIT, GetEventQuery, ListUpcomingEventsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

fn default_limit() -> u32 {
    DEFAULT_UPCOMING_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct UpcomingParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Times are `datetime-local` values (`2025-06-15T18:30`) in the
/// configured events timezone.
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub starts_at_local: String,
    #[serde(default)]
    pub ends_at_local: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at_local: Option<String>,
    pub ends_at_local: Option<String>,
}

pub async fn list_upcoming_events(
    Extension(state): Extension<HttpState>,
    Query(params): Query<UpcomingParams>,
) -> HttpResult<Json<Vec<EventDto>>> {
    state
        .services
        .event_queries
        .list_upcoming_events(ListUpcomingEventsQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_event(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<EventDto>> {
    state
        .services
        .event_queries
        .get_event(GetEventQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_event(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateEventRequest>,
) -> HttpResult<(StatusCode, Json<EventDto>)> {
    let command = CreateEventCommand {
        title: payload.title,
        description: payload.description,
        location: payload.location,
        starts_at_local: payload.starts_at_local,
        ends_at_local: payload.ends_at_local,
    };

    state
        .services
        .event_commands
        .create_event(command)
        .await
        .into_http()
        .map(|event| (StatusCode::CREATED, Json(event)))
}

pub async fn update_event(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEventRequest>,
) -> HttpResult<Json<EventDto>> {
    let command = UpdateEventCommand {
        id,
        title: payload.title,
        description: payload.description,
        location: payload.location,
        starts_at_local: payload.starts_at_local,
        ends_at_local: payload.ends_at_local,
    };

    state
        .services
        .event_commands
        .update_event(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_event(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .event_commands
        .delete_event(DeleteEventCommand { id })
        .await
        .into_http()
        .map(|_| StatusCode::NO_CONTENT)
}
