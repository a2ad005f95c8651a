use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::ConnectOptions;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::telegram_client::TelegramClient;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app: ApplicationSettings,
    pub telegram: TelegramSettings,
}

/// Both the token and the chat id may be missing; delivery is then skipped.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct TelegramSettings {
    pub api_base_url: String,
    #[serde(default)]
    pub bot_token: Option<SecretString>,
    #[serde(default)]
    pub chat_id: Option<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_ms: u64,
}

impl TelegramSettings {
    pub fn client(self) -> Result<TelegramClient, reqwest::Error> {
        let timeout = self.timeout();
        TelegramClient::new(self.api_base_url, self.bot_token, self.chat_id, timeout)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: SecretString,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    pub database_name: String,
    pub require_ssl: bool,
}

impl DatabaseSettings {
    /// Options for the application database itself.
    pub fn connect_options(&self) -> PgConnectOptions {
        self.server_options()
            .database(&self.database_name)
            .log_statements(tracing::log::LevelFilter::Trace)
    }

    /// Options for the server only, e.g. to create the database.
    pub fn server_options(&self) -> PgConnectOptions {
        let ssl_mode = match self.require_ssl {
            true => PgSslMode::Require,
            false => PgSslMode::Prefer,
        };

        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(self.password.expose_secret())
            .ssl_mode(ssl_mode)
    }
}

/// Deployment profile, picks `configuration/<profile>.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Local,
    Production,
}

impl Profile {
    pub fn file_name(self) -> &'static str {
        match self {
            Profile::Local => "local",
            Profile::Production => "production",
        }
    }

    fn from_env() -> Result<Self, config::ConfigError> {
        std::env::var("APP_ENV")
            .as_deref()
            .unwrap_or("local")
            .parse()
            .map_err(config::ConfigError::Message)
    }
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Profile::Local, Profile::Production]
            .into_iter()
            .find(|p| s.trim().eq_ignore_ascii_case(p.file_name()))
            .ok_or_else(|| format!("unknown APP_ENV `{s}`, expected `local` or `production`"))
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let conf_dir = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("No working directory: {e}")))?
        .join("configuration");
    let profile = Profile::from_env()?;

    config::Config::builder()
        .add_source(config::File::from(conf_dir.join("base")))
        .add_source(config::File::from(conf_dir.join(profile.file_name())))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}
