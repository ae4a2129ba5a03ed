// File: src/services/homework/api_client.rs
use crate::errors::{BotError, BotResult, UnreachableCause};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Источник статусов домашних работ
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Запрашивает изменения начиная с `from_date` (unix-время, секунды)
    async fn get_api_answer(&self, from_date: i64) -> BotResult<Value>;
}

pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: &str, token: &str, timeout: Duration) -> BotResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BotError::unreachable(endpoint, UnreachableCause::Transport(e.to_string())))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        })
    }

    fn unreachable(&self, cause: UnreachableCause) -> BotError {
        BotError::unreachable(self.endpoint.clone(), cause)
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn get_api_answer(&self, from_date: i64) -> BotResult<Value> {
        // Нулевой курсор означает "с текущего момента"
        let timestamp = if from_date == 0 {
            chrono::Utc::now().timestamp()
        } else {
            from_date
        };
        let params = [("from_date", timestamp.to_string())];

        debug!("Requesting {} with from_date={}", self.endpoint, timestamp);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&params)
            .send()
            .await
            .map_err(|e| self.unreachable(UnreachableCause::Transport(e.to_string())))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            debug!(
                "API returned status {} for from_date={}: {}",
                status.as_u16(),
                timestamp,
                body
            );
            return Err(self.unreachable(UnreachableCause::Status {
                code: status.as_u16(),
                params: format!("from_date={}", timestamp),
                body,
            }));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| self.unreachable(UnreachableCause::Decode(e.to_string())))
    }
}
