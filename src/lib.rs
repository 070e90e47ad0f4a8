//! Posts, events calendar and newsletter digest backend.
//!
//! Post slugs are generated and de-duplicated by
//! [`domain::post::services::PostSlugService`]; event times move between
//! `datetime-local` form values and UTC storage strings through
//! [`application::datetime`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
