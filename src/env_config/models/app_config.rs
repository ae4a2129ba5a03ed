use super::app_env::Env;
use serde::Deserialize;
use std::fs;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_RETRY_TIME_SECONDS: u64 = 600;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub poller: PollerConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    /// Путь к файлу, если его не нашли и взяли значения по умолчанию
    #[serde(skip)]
    pub missing_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    pub endpoint: String,
    pub retry_time_seconds: u64,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    pub api_base: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            format: "plain".to_string(),
        }
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            retry_time_seconds: DEFAULT_RETRY_TIME_SECONDS,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_TELEGRAM_API_BASE.to_string(),
        }
    }
}

impl PollerConfig {
    pub fn retry_time(&self) -> Duration {
        Duration::from_secs(self.retry_time_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl AppConfig {
    /// Загружает `config/<env>.toml`; без файла работает на значениях по умолчанию
    pub fn new(env: &Env) -> Result<AppConfig, Error> {
        let path = format!("config/{}.toml", env);
        Self::from_path(Path::new(&path))
    }

    pub fn from_path(path: &Path) -> Result<AppConfig, Error> {
        // Логгер ещё не поднят, поэтому о пропуске файла сообщает вызывающий код
        if !path.exists() {
            return Ok(AppConfig {
                missing_file: Some(path.to_path_buf()),
                ..AppConfig::default()
            });
        }

        let raw = fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<AppConfig, Error> {
        toml::from_str(raw).map_err(|err| Error::new(ErrorKind::InvalidData, err))
    }
}
