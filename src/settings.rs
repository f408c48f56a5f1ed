use std::num::NonZeroUsize;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::bank::pagination::QUESTIONS_PER_PAGE;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub questions_per_page: usize,
}

impl Settings {
    /// Reads defaults, then an optional `trivia.toml`, then `TRIVIA_*` variables
    /// (`TRIVIA_DATABASE__PATH`, `TRIVIA_QUESTIONS_PER_PAGE`).
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_config(
            Config::builder()
                .add_source(File::with_name("trivia").required(false))
                .add_source(Environment::with_prefix("TRIVIA").separator("__")),
        )
    }

    fn from_config(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let settings: Settings = builder
            .set_default("database.path", "trivia.db")?
            .set_default("questions_per_page", QUESTIONS_PER_PAGE.get() as i64)?
            .build()?
            .try_deserialize()?;
        if settings.questions_per_page == 0 {
            return Err(ConfigError::Message(
                "questions_per_page must be at least 1".to_owned(),
            ));
        }
        Ok(settings)
    }

    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.questions_per_page).unwrap_or(QUESTIONS_PER_PAGE)
    }
}
