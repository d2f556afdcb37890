use anyhow::{anyhow, bail, Context, Result};
use std::env;
use storage::PgConnectOptions;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_LOG_FILE: &str = "logs/todo-bot.log";

/// Task store settings. `url` (from `DATABASE_URL`) takes precedence over the discrete fields;
/// a `sqlite:` URL selects the SQLite backend.
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Loads from DATABASE_URL, DB_HOST, DB_PORT, DB_NAME, DB_USERNAME, DB_PASSWORD, DB_MAX_CONNECTIONS.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("DB_PORT") {
            Ok(s) => s.parse().with_context(|| format!("Invalid DB_PORT: {}", s))?,
            Err(_) => DEFAULT_DB_PORT,
        };
        let max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(s) => s
                .parse()
                .with_context(|| format!("Invalid DB_MAX_CONNECTIONS: {}", s))?,
            Err(_) => DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(Self {
            url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            host: env::var("DB_HOST").unwrap_or_else(|_| DEFAULT_DB_HOST.to_string()),
            port,
            name: env::var("DB_NAME").unwrap_or_default(),
            username: env::var("DB_USERNAME").unwrap_or_default(),
            password: env::var("DB_PASSWORD").unwrap_or_default(),
            max_connections,
        })
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.as_deref().is_some_and(|u| u.starts_with("sqlite:"))
    }

    /// Postgres options from the discrete fields.
    pub fn pg_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.username)
            .password(&self.password)
    }

    /// Store location for logs; never includes the password.
    pub fn describe(&self) -> String {
        match &self.url {
            Some(url) if self.is_sqlite() => url.clone(),
            Some(_) => "postgres (DATABASE_URL)".to_string(),
            None => format!(
                "postgres://{}@{}:{}/{}",
                self.username, self.host, self.port, self.name
            ),
        }
    }
}

/// Bot configuration, loaded from environment variables.
pub struct BotConfig {
    pub bot_token: String,
    /// Optional Telegram Bot API base URL (e.g. a local Bot API server or a mock in tests).
    /// Environment variable: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
    pub log_file: String,
    pub database: DatabaseConfig,
}

impl BotConfig {
    /// Loads config from the environment. `token` overrides `BOT_TOKEN` when given.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let database = DatabaseConfig::from_env()?;

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            database,
        })
    }

    /// Checks that the settings needed to start are present.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            bail!("BOT_TOKEN is empty");
        }
        if self.database.url.is_none() {
            if self.database.name.is_empty() {
                bail!("DB_NAME not set (or set DATABASE_URL)");
            }
            if self.database.username.is_empty() {
                bail!("DB_USERNAME not set (or set DATABASE_URL)");
            }
        }
        if self.database.max_connections == 0 {
            bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        Ok(())
    }
}
