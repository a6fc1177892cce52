use serde::{Deserialize, Serialize};

/// Display format for all timestamps in the store.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time as "YYYY-MM-DD HH:MM:SS".
pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub messages: Vec<Message>,
}

/// One completed query/response exchange.
///
/// Only ever created whole: a failed generation never produces a Message,
/// and stored messages are never edited.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Message {
    pub id: String,
    pub query: String,
    pub response: String,
    pub timestamp: String,
}
