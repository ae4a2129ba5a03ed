mod env_config;
mod errors;
mod logger;
mod services;

use env_config::models::{
    app_config::AppConfig,
    app_env::{AppEnv, Env},
    app_setting::AppSettings,
};
use errors::BotResult;
use services::homework::{api_client::PracticumClient, scheduler::HomeworkScheduler};
use services::telegram::client::TelegramBot;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let env = match Env::from_process() {
        Ok(env) => env,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    // Конфиг читается до логгера: от него зависят уровень и формат
    let config = match AppConfig::new(&env) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    // Логгер нужен до проверки токенов, чтобы CRITICAL попал в лог
    if let Err(err) = logger::init_logger(&config.log.level, &config.log.format, env.is_local()) {
        eprintln!("Failed to initialize logger: {}", err);
        return ExitCode::FAILURE;
    }

    if let Some(path) = &config.missing_file {
        warn!(
            "Config file {} not found, using built-in defaults",
            path.display()
        );
    }

    // Без токенов цикл не запускается; каждый пропуск уже залогирован как CRITICAL
    let Ok(environment) = AppEnv::new(env) else {
        return ExitCode::FAILURE;
    };

    let settings = AppSettings {
        app_config: config,
        app_env: environment,
    };

    info!("Starting homework status bot...");
    info!("Current environment: {}", settings.app_env.env);
    if settings.app_env.is_local() {
        debug!("Configuration details: {:#?}", settings);
    }

    match build_scheduler(&settings) {
        Ok(mut scheduler) => {
            scheduler.start().await;
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(severity = "CRITICAL", "Failed to build HTTP clients: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Собирает клиентов API и Telegram из настроек
fn build_scheduler(
    settings: &AppSettings,
) -> BotResult<HomeworkScheduler<PracticumClient, TelegramBot>> {
    let credentials = &settings.app_env.credentials;
    let poller = &settings.app_config.poller;

    let api = PracticumClient::new(
        &poller.endpoint,
        &credentials.practicum_token,
        poller.request_timeout(),
    )?;
    let bot = TelegramBot::new(
        &settings.app_config.telegram.api_base,
        &credentials.telegram_token,
        &credentials.telegram_chat_id,
        poller.request_timeout(),
    )?;

    Ok(HomeworkScheduler::new(
        api,
        bot,
        poller.retry_time(),
        chrono::Utc::now().timestamp(),
    ))
}
