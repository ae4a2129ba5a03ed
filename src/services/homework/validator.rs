use crate::errors::{BotError, BotResult};
use serde_json::Value;

/// Проверенный ответ API: курсор и список работ (свежие первыми)
#[derive(Debug, PartialEq)]
pub struct CheckedResponse<'a> {
    pub current_date: i64,
    pub homeworks: &'a [Value],
}

/// Проверяет ответ на типы и наличие ключей. Записи внутри `homeworks`
/// не разбираются, это делает `parse_status`.
pub fn check_response(response: &Value) -> BotResult<CheckedResponse<'_>> {
    let map = response
        .as_object()
        .ok_or_else(|| BotError::MalformedResponse("Ответ не является словарём".into()))?;

    let current_date = map
        .get("current_date")
        .ok_or(BotError::MissingField("current_date"))?;
    let homeworks = map
        .get("homeworks")
        .ok_or(BotError::MissingField("homeworks"))?;

    let homeworks = homeworks
        .as_array()
        .ok_or_else(|| BotError::MalformedResponse("Ключ \"homeworks\" не список".into()))?;
    let current_date = current_date.as_i64().ok_or_else(|| {
        BotError::MalformedResponse("Ключ \"current_date\" не целое число".into())
    })?;

    Ok(CheckedResponse {
        current_date,
        homeworks: homeworks.as_slice(),
    })
}
