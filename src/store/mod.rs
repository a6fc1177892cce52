pub mod models;

use crate::error::SessionError;
use models::{now_timestamp, Conversation, Message};

/// In-memory conversation histories in creation order, plus the pointer to
/// the conversation currently receiving messages.
///
/// Nothing is persisted; the store lives and dies with the process.
#[derive(Debug, Default)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    active_id: Option<String>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new conversation and make it the active one.
    ///
    /// Ids derive from the current count ("chat_1", "chat_2", ...). That is
    /// collision-free while conversations are never deleted; adding deletion
    /// would require a monotonic counter instead.
    pub fn create_conversation(&mut self) -> Conversation {
        let n = self.conversations.len() + 1;
        let conversation = Conversation {
            id: format!("chat_{}", n),
            title: format!("Chat {}", n),
            created_at: now_timestamp(),
            messages: Vec::new(),
        };
        self.active_id = Some(conversation.id.clone());
        self.conversations.push(conversation.clone());
        conversation
    }

    /// Make an existing conversation the active one.
    pub fn activate(&mut self, id: &str) -> Result<(), SessionError> {
        if self.conversations.iter().any(|c| c.id == id) {
            self.active_id = Some(id.to_string());
            Ok(())
        } else {
            Err(SessionError::NotFound(id.to_string()))
        }
    }

    /// Append a completed exchange to a conversation's history. The only way
    /// message history ever changes.
    pub fn append_message(
        &mut self,
        id: &str,
        query: &str,
        response: &str,
        timestamp: &str,
    ) -> Result<Message, SessionError> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        let message = Message {
            id: uuid::Uuid::new_v4().to_string(),
            query: query.to_string(),
            response: response.to_string(),
            timestamp: timestamp.to_string(),
        };
        conversation.messages.push(message.clone());
        Ok(message)
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Conversations in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Conversation> {
        self.conversations.iter()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active(&self) -> Option<&Conversation> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_create_two_conversations() {
        let mut store = ConversationStore::new();
        let first = store.create_conversation();
        let second = store.create_conversation();
        assert_eq!(first.id, "chat_1");
        assert_eq!(first.title, "Chat 1");
        assert_eq!(second.id, "chat_2");
        assert_eq!(second.title, "Chat 2");
        assert_eq!(store.active_id(), Some("chat_2"));
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut store = ConversationStore::new();
        let ids: HashSet<String> = (0..10).map(|_| store.create_conversation().id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_activate_unknown_id() {
        let mut store = ConversationStore::new();
        store.create_conversation();
        let err = store.activate("chat_99").unwrap_err();
        assert!(matches!(err, SessionError::NotFound(id) if id == "chat_99"));
        assert_eq!(store.active_id(), Some("chat_1"));
    }

    #[test]
    fn test_activate_switches_pointer_only() {
        let mut store = ConversationStore::new();
        store.create_conversation();
        store.create_conversation();
        store
            .append_message("chat_1", "q", "r", "2026-01-01 00:00:00")
            .unwrap();
        store.activate("chat_1").unwrap();
        assert_eq!(store.active().unwrap().id, "chat_1");
        assert_eq!(store.get("chat_1").unwrap().messages.len(), 1);
        assert_eq!(store.get("chat_2").unwrap().messages.len(), 0);
    }

    #[test]
    fn test_append_unknown_id() {
        let mut store = ConversationStore::new();
        let err = store
            .append_message("chat_1", "q", "r", "2026-01-01 00:00:00")
            .unwrap_err();
        assert!(matches!(err, SessionError::NotFound(_)));
    }

    #[test]
    fn test_append_preserves_order_and_existing_entries() {
        let mut store = ConversationStore::new();
        store.create_conversation();
        store
            .append_message("chat_1", "first q", "first r", "2026-01-01 00:00:00")
            .unwrap();
        store
            .append_message("chat_1", "second q", "second r", "2026-01-01 00:00:01")
            .unwrap();
        let messages = &store.get("chat_1").unwrap().messages;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].query, "first q");
        assert_eq!(messages[0].response, "first r");
        assert_eq!(messages[1].query, "second q");
    }

    #[test]
    fn test_iteration_in_creation_order() {
        let mut store = ConversationStore::new();
        store.create_conversation();
        store.create_conversation();
        store.create_conversation();
        let ids: Vec<&str> = store.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["chat_1", "chat_2", "chat_3"]);
    }
}
