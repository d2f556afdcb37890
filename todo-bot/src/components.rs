//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::Result;
use std::sync::Arc;
use storage::{PgTaskRepository, SqliteTaskRepository, TaskRepository};
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::config::{BotConfig, DatabaseConfig};

/// Core dependencies for run_bot; produced by the component factory.
pub struct BotComponents {
    pub repo: Arc<dyn TaskRepository>,
    pub teloxide_bot: Bot,
}

/// Opens the task store selected by the config (SQLite for `sqlite:` URLs, Postgres otherwise).
#[instrument(skip(config))]
pub async fn create_task_repository(config: &DatabaseConfig) -> Result<Arc<dyn TaskRepository>> {
    let store = config.describe();

    let repo: Arc<dyn TaskRepository> = match config.url.as_deref() {
        Some(url) if config.is_sqlite() => {
            info!(store = %store, "Using SQLite task store");
            Arc::new(SqliteTaskRepository::new(url).await.map_err(|e| {
                error!(error = %e, store = %store, "Failed to initialize SQLite task store");
                anyhow::anyhow!("Failed to initialize SQLite task store: {}", e)
            })?)
        }
        Some(url) => {
            info!(store = %store, "Using Postgres task store");
            Arc::new(
                PgTaskRepository::connect(url, config.max_connections)
                    .await
                    .map_err(|e| {
                        error!(error = %e, store = %store, "Failed to initialize Postgres task store");
                        anyhow::anyhow!("Failed to initialize Postgres task store: {}", e)
                    })?,
            )
        }
        None => {
            info!(store = %store, "Using Postgres task store");
            Arc::new(
                PgTaskRepository::connect_with(config.pg_options(), config.max_connections)
                    .await
                    .map_err(|e| {
                        error!(error = %e, store = %store, "Failed to initialize Postgres task store");
                        anyhow::anyhow!("Failed to initialize Postgres task store: {}", e)
                    })?,
            )
        }
    };

    Ok(repo)
}

/// teloxide Bot for the configured token, pointed at `telegram_api_url` when set.
pub fn build_teloxide_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.bot_token.clone());
    if let Some(ref url_str) = config.telegram_api_url {
        match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        }
    } else {
        bot
    }
}

/// Builds BotComponents: task store and transport client.
#[instrument(skip(config))]
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let repo = create_task_repository(&config.database).await?;
    let teloxide_bot = build_teloxide_bot(config);
    Ok(BotComponents { repo, teloxide_bot })
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::Task;

    fn sqlite_config(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: Some(url.to_string()),
            host: "localhost".to_string(),
            port: 5432,
            name: String::new(),
            username: String::new(),
            password: String::new(),
            max_connections: 1,
        }
    }

    #[tokio::test]
    async fn test_sqlite_url_opens_sqlite_store() {
        let dir = tempfile::TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("tasks.db").display());

        let repo = create_task_repository(&sqlite_config(&url)).await.unwrap();
        repo.add(&Task::new("from factory", 9)).await.unwrap();

        assert_eq!(repo.count(9).await.unwrap(), 1);
    }

    #[test]
    fn test_build_bot_with_api_url() {
        let config = BotConfig {
            bot_token: "123:abc".to_string(),
            telegram_api_url: Some("http://127.0.0.1:8081/".to_string()),
            log_file: "logs/test.log".to_string(),
            database: sqlite_config("sqlite::memory:"),
        };

        let bot = build_teloxide_bot(&config);

        assert_eq!(bot.api_url().as_str(), "http://127.0.0.1:8081/");
        assert_eq!(bot.token(), "123:abc");
    }
}
