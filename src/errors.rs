use std::fmt;
use thiserror::Error;

/// Причина, по которой эндпоинт API считается недоступным
#[derive(Debug, Clone, PartialEq)]
pub enum UnreachableCause {
    /// Ошибка соединения или таймаут
    Transport(String),
    /// Код ответа отличается от 200
    Status {
        code: u16,
        params: String,
        body: String,
    },
    /// Эндпоинт ответил, но тело не разбирается как JSON
    Decode(String),
}

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Отсутствуют обязательные переменные окружения: {}", .0.join(", "))]
    Configuration(Vec<&'static str>),

    #[error("{}", describe_unreachable(.endpoint, .cause))]
    EndpointUnreachable {
        endpoint: String,
        cause: UnreachableCause,
    },

    #[error("{0}")]
    MalformedResponse(String),

    #[error("Отсутствует ключ \"{0}\"")]
    MissingField(&'static str),

    #[error("Недопустимый статус: {0}")]
    UnknownStatus(String),

    #[error("Бот не смог отправить сообщение: {0}")]
    NotificationDelivery(String),
}

pub type BotResult<T> = Result<T, BotError>;

impl BotError {
    pub fn unreachable(endpoint: impl Into<String>, cause: UnreachableCause) -> Self {
        BotError::EndpointUnreachable {
            endpoint: endpoint.into(),
            cause,
        }
    }

    /// Текст, который уходит в чат вместо вердикта при сбое цикла
    pub fn to_chat_message(&self) -> String {
        format!("Сбой в работе программы: {}", self)
    }
}

fn describe_unreachable(endpoint: &str, cause: &UnreachableCause) -> String {
    match cause {
        UnreachableCause::Transport(reason) => {
            format!("Эндпоинт {} недоступен: {}", endpoint, reason)
        }
        UnreachableCause::Status { code: 404, .. } => {
            format!("Эндпоинт {} недоступен. Код ответа API: 404", endpoint)
        }
        UnreachableCause::Status { code, .. } => {
            format!("Что-то пошло не так. Код ответа API: {}", code)
        }
        UnreachableCause::Decode(reason) => {
            format!("Эндпоинт {} вернул некорректный JSON: {}", endpoint, reason)
        }
    }
}

impl fmt::Display for UnreachableCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnreachableCause::Transport(reason) => write!(f, "transport: {}", reason),
            UnreachableCause::Status { code, params, body } => {
                write!(f, "status {} (params: {}, body: {})", code, params, body)
            }
            UnreachableCause::Decode(reason) => write!(f, "decode: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

    #[test]
    fn test_not_found_message() {
        let err = BotError::unreachable(
            ENDPOINT,
            UnreachableCause::Status {
                code: 404,
                params: "from_date=1".into(),
                body: String::new(),
            },
        );
        assert_eq!(
            err.to_chat_message(),
            format!(
                "Сбой в работе программы: Эндпоинт {} недоступен. Код ответа API: 404",
                ENDPOINT
            )
        );
    }

    #[test]
    fn test_other_status_message() {
        let err = BotError::unreachable(
            ENDPOINT,
            UnreachableCause::Status {
                code: 500,
                params: "from_date=1".into(),
                body: "oops".into(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Что-то пошло не так. Код ответа API: 500"
        );
    }

    #[test]
    fn test_configuration_lists_all_names() {
        let err = BotError::Configuration(vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
        assert_eq!(
            err.to_string(),
            "Отсутствуют обязательные переменные окружения: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }
}
