use crate::application::{dto::NewsletterDigestDto, queries::newsletter::DigestQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct DigestParams {
    #[serde(default)]
    pub featured: Option<String>,
    #[serde(default)]
    pub events: Option<u32>,
}

pub async fn digest(
    Extension(state): Extension<HttpState>,
    Query(params): Query<DigestParams>,
) -> HttpResult<Json<NewsletterDigestDto>> {
    state
        .services
        .newsletter
        .build_digest(DigestQuery {
            featured_slug: params.featured,
            event_limit: params.events,
        })
        .await
        .into_http()
        .map(Json)
}
