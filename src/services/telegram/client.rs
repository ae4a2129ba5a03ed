use crate::errors::{BotError, BotResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Канал доставки уведомлений
#[async_trait]
pub trait ChatSender: Send + Sync {
    async fn send_message(&self, text: &str) -> BotResult<()>;
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Клиент Telegram Bot API, умеет только `sendMessage`
pub struct TelegramBot {
    client: Client,
    api_base: String,
    token: String,
    chat_id: String,
}

impl TelegramBot {
    pub fn new(api_base: &str, token: &str, chat_id: &str, timeout: Duration) -> BotResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BotError::NotificationDelivery(e.to_string()))?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }
}

#[async_trait]
impl ChatSender for TelegramBot {
    async fn send_message(&self, text: &str) -> BotResult<()> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            // без URL: в нём токен бота
            .map_err(|e| BotError::NotificationDelivery(e.without_url().to_string()))?;

        let status = response.status();
        let body: Option<TelegramResponse> = response.json().await.ok();

        match body {
            Some(TelegramResponse { ok: true, .. }) if status.is_success() => Ok(()),
            Some(TelegramResponse {
                description: Some(description),
                ..
            }) => Err(BotError::NotificationDelivery(format!(
                "{} ({})",
                description,
                status.as_u16()
            ))),
            _ => Err(BotError::NotificationDelivery(format!(
                "Telegram API status {}",
                status.as_u16()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn bot_for(server: &MockServer) -> TelegramBot {
        TelegramBot::new(&server.base_url(), "telegram-token", "4242", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_send_message_posts_to_chat() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/bottelegram-token/sendMessage")
                    .json_body(json!({"chat_id": "4242", "text": "привет"}));
                then.status(200)
                    .json_body(json!({"ok": true, "result": {"message_id": 1}}));
            })
            .await;

        bot_for(&server).send_message("привет").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_message_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/bottelegram-token/sendMessage");
                then.status(400).json_body(json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: chat not found"
                }));
            })
            .await;

        let err = bot_for(&server).send_message("hi").await.unwrap_err();
        match err {
            BotError::NotificationDelivery(reason) => {
                assert!(reason.contains("chat not found"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_message_non_json_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(502).body("bad gateway");
            })
            .await;

        let err = bot_for(&server).send_message("hi").await.unwrap_err();
        assert!(matches!(err, BotError::NotificationDelivery(ref r) if r.contains("502")));
    }
}
