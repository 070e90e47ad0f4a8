// src/config.rs
use crate::application::datetime::parse_timezone;
use chrono_tz::Tz;
use std::{env, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    events_timezone: Tz,
    slug_strategy: SlugStrategy,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// How titles are turned into slugs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlugStrategy {
    /// Portuguese / Latin-1 accents only; other scripts become separators.
    #[default]
    Locale,
    /// Full Unicode transliteration.
    Transliterate,
}

impl FromStr for SlugStrategy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "locale" => Ok(Self::Locale),
            "transliterate" => Ok(Self::Transliterate),
            other => Err(ConfigError::Invalid(format!(
                "SLUG_STRATEGY must be 'locale' or 'transliterate', got '{other}'"
            ))),
        }
    }
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_events_timezone() -> &'static str {
    "Europe/Lisbon"
}

fn default_max_connections() -> u32 {
    10
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. `DATABASE_URL` is
    /// required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
                ))
            })?,
            None => default_max_connections(),
        };

        let timezone_name =
            lookup("EVENTS_TIMEZONE").unwrap_or_else(|| default_events_timezone().to_string());
        let events_timezone =
            parse_timezone(&timezone_name).map_err(|err| ConfigError::Invalid(err.to_string()))?;

        let slug_strategy = lookup("SLUG_STRATEGY")
            .map(|raw| raw.parse::<SlugStrategy>())
            .transpose()?
            .unwrap_or_default();

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            events_timezone,
            slug_strategy,
            allowed_origins,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn events_timezone(&self) -> Tz {
        self.events_timezone
    }

    pub fn slug_strategy(&self) -> SlugStrategy {
        self.slug_strategy
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
