use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_POST_SLUG_FORMAT: &str = "posts_slug_format_chk";
const CNT_POST_PUBLISHED_CHECK: &str = "posts_published_requires_timestamp_chk";
const CNT_EVENT_SCHEDULE: &str = "events_schedule_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_POST_SLUG_FORMAT => DomainError::Validation("malformed slug".into()),
                    CNT_POST_PUBLISHED_CHECK => {
                        DomainError::Validation("published posts require published_at".into())
                    }
                    CNT_EVENT_SCHEDULE => {
                        DomainError::Validation("event cannot end before it starts".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
