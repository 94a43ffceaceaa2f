//! One-shot notifications carried in the session until the next rendered page.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::warn;

const FLASH_KEY: &str = "_flashes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Danger,
}

impl FlashLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

/// Queues a message for the next page that drains the session.
pub async fn push(session: &Session, level: FlashLevel, message: impl Into<String>) {
    let mut queued: Vec<FlashMessage> = match session.get(FLASH_KEY).await {
        Ok(queued) => queued.unwrap_or_default(),
        Err(e) => {
            warn!("Failed to read flash messages: {}", e);
            Vec::new()
        }
    };

    queued.push(FlashMessage {
        level,
        message: message.into(),
    });

    if let Err(e) = session.insert(FLASH_KEY, queued).await {
        warn!("Failed to queue flash message: {}", e);
    }
}

/// Removes and returns every queued message.
pub async fn take(session: &Session) -> Vec<FlashMessage> {
    match session.remove(FLASH_KEY).await {
        Ok(queued) => queued.unwrap_or_default(),
        Err(e) => {
            warn!("Failed to drain flash messages: {}", e);
            Vec::new()
        }
    }
}
