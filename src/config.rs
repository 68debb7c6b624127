use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub pagination: PaginationSettings,
    #[serde(default)]
    pub quiz: QuizSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub path: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationSettings {
    pub questions_per_page: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizSettings {
    /// Fixed seed for quiz picks. Unset means seeded from the OS.
    pub seed: Option<u64>,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_owned(),
                port: 8080,
            },
            database: DatabaseSettings {
                path: "trivia.db".to_owned(),
                max_connections: 5,
            },
            pagination: PaginationSettings {
                questions_per_page: 10,
            },
            quiz: QuizSettings::default(),
        }
    }
}

impl Settings {
    /// Defaults, then `trivia.toml` (or the file in `TRIVIA_CONFIG`), then `TRIVIA__*`
    /// environment variables. `DB_PATH` is still honored for the database file.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let defaults = Settings::default();
        let file = env::var("TRIVIA_CONFIG").unwrap_or_else(|_| "trivia".to_owned());

        let mut builder = config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("database.path", defaults.database.path)?
            .set_default(
                "database.max_connections",
                i64::from(defaults.database.max_connections),
            )?
            .set_default(
                "pagination.questions_per_page",
                defaults.pagination.questions_per_page as i64,
            )?
            .add_source(config::File::with_name(&file).required(false))
            .add_source(
                config::Environment::with_prefix("TRIVIA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );
        if let Ok(path) = env::var("DB_PATH") {
            builder = builder.set_override("database.path", path)?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.pagination.questions_per_page == 0 {
            return Err(config::ConfigError::Message(
                "pagination.questions_per_page must be positive".to_owned(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(config::ConfigError::Message(
                "database.max_connections must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}
