use super::client::ChatSender;
use tracing::{error, info};

/// Отправляет сообщение и только логирует результат.
/// Ошибка доставки не пробрасывается, повторов нет.
pub async fn send_message(bot: &dyn ChatSender, message: &str) -> bool {
    match bot.send_message(message).await {
        Ok(()) => {
            info!("Бот отправил сообщение \"{}\"", message);
            true
        }
        Err(err) => {
            error!("Бот не смог отправить сообщение \"{}\": {}", message, err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{BotError, BotResult};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingSender {
        fail: bool,
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ChatSender for RecordingSender {
        async fn send_message(&self, text: &str) -> BotResult<()> {
            self.sent.lock().unwrap().push(text.to_string());
            if self.fail {
                Err(BotError::NotificationDelivery("chat is down".into()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_delivered() {
        let sender = RecordingSender {
            fail: false,
            sent: Mutex::new(Vec::new()),
        };

        assert!(send_message(&sender, "ok").await);
        assert_eq!(*sender.sent.lock().unwrap(), vec!["ok".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_is_swallowed() {
        let sender = RecordingSender {
            fail: true,
            sent: Mutex::new(Vec::new()),
        };

        assert!(!send_message(&sender, "lost").await);
        assert_eq!(sender.sent.lock().unwrap().len(), 1);
    }
}
