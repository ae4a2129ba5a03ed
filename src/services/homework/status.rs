// File: src/services/homework/status.rs
use crate::errors::{BotError, BotResult};
use serde_json::Value;
use std::str::FromStr;

/// Статусы проверки, которые умеет возвращать API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(BotError::UnknownStatus(other.to_string())),
        }
    }
}

/// Вердикт для строки статуса из API
pub fn verdict_for(status: &str) -> BotResult<&'static str> {
    Ok(status.parse::<HomeworkStatus>()?.verdict())
}

/// Собирает текст уведомления из одной записи `homeworks`.
/// Форма записи здесь проверяется заново: валидатор ответа смотрит только на список.
pub fn parse_status(homework: &Value) -> BotResult<String> {
    let record = homework
        .as_object()
        .ok_or_else(|| BotError::MalformedResponse("Запись о работе не является словарём".into()))?;

    let homework_name = required_str(record.get("homework_name"), "homework_name")?;
    let status = required_str(record.get("status"), "status")?;

    let verdict = verdict_for(status)?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework_name, verdict
    ))
}

fn required_str<'a>(value: Option<&'a Value>, field: &'static str) -> BotResult<&'a str> {
    match value {
        None | Some(Value::Null) => Err(BotError::MissingField(field)),
        Some(Value::String(s)) if s.is_empty() => Err(BotError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(BotError::MalformedResponse(format!(
            "Ключ \"{}\" не строка",
            field
        ))),
    }
}
