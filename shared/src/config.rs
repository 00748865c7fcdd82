use std::env;

use crate::errors::{Result, ServiceError};

const DEFAULT_SITE_URL: &str = "https://example.com/promo";
const DEFAULT_CHANNEL_INVITE_URL: &str = "https://t.me/example_channel";

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    pub admin_chat_id: Option<i64>,
    pub channel_id: Option<i64>,
    pub site_url: String,
    pub channel_invite_url: String,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        let token = env::var("BOT_TOKEN")
            .map_err(|_| ServiceError::Config("BOT_TOKEN not set".to_string()))?;

        let admin_chat_id = optional_chat_id("ADMIN_CHAT_ID")?;
        // A channel id of 0 means the same as an unset one: no channel to check.
        let channel_id = optional_chat_id("CHANNEL_ID")?.filter(|&id| id != 0);

        Ok(Self {
            token,
            admin_chat_id,
            channel_id,
            site_url: env::var("SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string()),
            channel_invite_url: env::var("CHANNEL_INVITE_URL")
                .unwrap_or_else(|_| DEFAULT_CHANNEL_INVITE_URL.to_string()),
        })
    }
}

fn optional_chat_id(name: &str) -> Result<Option<i64>> {
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| ServiceError::Config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}
