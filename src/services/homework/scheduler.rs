// File: src/services/homework/scheduler.rs
use super::api_client::HomeworkApi;
use super::status::parse_status;
use super::validator::check_response;
use crate::errors::BotResult;
use crate::services::telegram::client::ChatSender;
use crate::services::telegram::notifier;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Итог одного цикла опроса
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Пустой `homeworks`, сообщать нечего
    NoUpdate,
    /// Сообщение совпало с предыдущим и не отправлялось
    Suppressed,
    /// Сообщение ушло в Notifier (доставка могла не удаться)
    Notified { delivered: bool },
}

/// Цикл опроса API: курсор и последнее сообщение живут только здесь
pub struct HomeworkScheduler<A, S> {
    api: A,
    bot: S,
    retry_time: Duration,
    cursor: i64,
    last_message: Option<String>,
}

impl<A: HomeworkApi, S: ChatSender> HomeworkScheduler<A, S> {
    pub fn new(api: A, bot: S, retry_time: Duration, start_from: i64) -> Self {
        Self {
            api,
            bot,
            retry_time,
            cursor: start_from,
            last_message: None,
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    #[cfg(test)]
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Опрос и разбор ответа. Курсор сдвигается только если весь разбор прошёл.
    async fn poll(&mut self) -> BotResult<Option<String>> {
        let answer = self.api.get_api_answer(self.cursor).await?;
        let checked = check_response(&answer)?;

        let message = match checked.homeworks.first() {
            Some(homework) => Some(parse_status(homework)?),
            None => None,
        };

        if checked.current_date >= self.cursor {
            self.cursor = checked.current_date;
        } else {
            warn!(
                "Server current_date {} is behind cursor {}, keeping cursor",
                checked.current_date, self.cursor
            );
        }

        Ok(message)
    }

    /// Один цикл без паузы: опрос, разбор, отправка при изменении сообщения
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let pending = match self.poll().await {
            Ok(Some(message)) => Some(message),
            Ok(None) => {
                debug!("Статус не обновился.");
                None
            }
            Err(err) => {
                error!("Сбой опроса API: {}", err);
                Some(err.to_chat_message())
            }
        };

        let Some(message) = pending else {
            return CycleOutcome::NoUpdate;
        };

        if self.last_message.as_deref() == Some(message.as_str()) {
            debug!("Message unchanged, not sending");
            return CycleOutcome::Suppressed;
        }

        let delivered = notifier::send_message(&self.bot, &message).await;
        // Запоминаем вычисленное сообщение, даже если доставка не удалась
        self.last_message = Some(message);

        CycleOutcome::Notified { delivered }
    }

    /// Бесконечный цикл опроса с фиксированной паузой между итерациями
    pub async fn start(&mut self) {
        info!(
            "Starting homework poller with {} second interval, cursor {}",
            self.retry_time.as_secs(),
            self.cursor
        );

        loop {
            let outcome = self.run_cycle().await;
            debug!("Cycle finished: {:?}", outcome);
            tokio::time::sleep(self.retry_time).await;
        }
    }
}
