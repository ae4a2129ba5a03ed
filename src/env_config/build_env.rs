use super::models::app_env::{AppEnv, Credentials, Env};
use crate::errors::{BotError, BotResult};
use std::env;
use std::str::FromStr;
use tracing::error;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

impl Env {
    /// `ENV` из окружения процесса (и `.env`, если он есть), по умолчанию `local`
    pub fn from_process() -> Result<Env, String> {
        dotenvy::dotenv().ok();

        match env::var("ENV") {
            Ok(value) => Env::from_str(&value),
            Err(_) => Ok(Env::Local),
        }
    }
}

impl AppEnv {
    pub fn new(env: Env) -> BotResult<AppEnv> {
        Ok(AppEnv {
            env,
            credentials: Credentials::from_lookup(|name| env::var(name).ok())?,
        })
    }
}

impl Credentials {
    /// Проверяет все три переменные сразу, чтобы в логе были видны все пропуски.
    /// Пустая строка считается отсутствующим значением.
    pub fn from_lookup<F>(lookup: F) -> BotResult<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| -> String {
            match lookup(name).filter(|value| !value.trim().is_empty()) {
                Some(value) => value,
                None => {
                    error!(
                        severity = "CRITICAL",
                        "Отсутствует обязательная переменная окружения: {}. Программа принудительно остановлена.",
                        name
                    );
                    missing.push(name);
                    String::new()
                }
            }
        };

        let practicum_token = read(PRACTICUM_TOKEN);
        let telegram_token = read(TELEGRAM_TOKEN);
        let telegram_chat_id = read(TELEGRAM_CHAT_ID);

        if !missing.is_empty() {
            return Err(BotError::Configuration(missing));
        }

        Ok(Credentials {
            practicum_token,
            telegram_token,
            telegram_chat_id,
        })
    }
}
