// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_event;
mod postgres_post;

pub use error::map_sqlx;
pub use postgres_event::PostgresEventRepository;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
