use std::path::Path;

use tracing::{debug, info, warn};

use crate::doc_processor;
use crate::document::{DocumentContext, LoadedDocument};
use crate::error::SessionError;
use crate::llm::GenerationClient;
use crate::prompt::build_prompt;
use crate::store::models::{now_timestamp, Conversation, Message};
use crate::store::ConversationStore;

/// One user's chat state: the grounding document plus every conversation
/// thread, behind a single owning handle.
///
/// All mutation goes through `&mut self`, so a session has one writer by
/// construction. Wrap it in a `Mutex` if several request handlers must share
/// a session.
#[derive(Debug, Default)]
pub struct ChatSession {
    document: DocumentContext,
    store: ConversationStore,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract a document's text and make it the grounding context.
    ///
    /// On extraction failure the previously loaded document, if any, is kept.
    pub fn load_document(&mut self, path: &Path) -> Result<&LoadedDocument, SessionError> {
        let parsed = doc_processor::parse_file(path)?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        info!(
            filename = %filename,
            file_type = %parsed.file_type,
            chars = parsed.content.len(),
            "document loaded"
        );
        Ok(self.document.set(LoadedDocument {
            filename,
            file_type: parsed.file_type,
            content: parsed.content,
        }))
    }

    /// Replace the grounding context with already-extracted text.
    pub fn set_document(&mut self, document: LoadedDocument) {
        self.document.set(document);
    }

    pub fn document(&self) -> Option<&LoadedDocument> {
        self.document.get()
    }

    /// Start a new conversation and switch to it.
    pub fn new_conversation(&mut self) -> Conversation {
        let conversation = self.store.create_conversation();
        info!(id = %conversation.id, "conversation created");
        conversation
    }

    pub fn select_conversation(&mut self, id: &str) -> Result<(), SessionError> {
        self.store.activate(id)
    }

    /// Conversations in creation order, for the sidebar.
    pub fn conversations(&self) -> impl Iterator<Item = &Conversation> {
        self.store.iter()
    }

    pub fn active_conversation(&self) -> Option<&Conversation> {
        self.store.active()
    }

    /// Answer `query` from the loaded document and record the exchange in the
    /// active conversation.
    ///
    /// Rejected before the backend is called when no conversation is active
    /// or no document text is available. A backend failure records nothing;
    /// resubmitting the same query is the only retry path.
    pub async fn handle_query(
        &mut self,
        client: &dyn GenerationClient,
        query: &str,
    ) -> Result<Message, SessionError> {
        let Some(active_id) = self.store.active_id().map(str::to_string) else {
            warn!("query rejected: no active conversation");
            return Err(SessionError::NoActiveConversation);
        };
        let document_text = match self.document.text() {
            Some(text) if !text.is_empty() => text,
            _ => {
                warn!("query rejected: no document loaded");
                return Err(SessionError::NoDocumentLoaded);
            }
        };

        let prompt = build_prompt(document_text, query);
        debug!(conversation = %active_id, prompt_chars = prompt.len(), "querying backend");
        let response = client.generate(&prompt).await?;

        let timestamp = now_timestamp();
        self.store
            .append_message(&active_id, query, &response, &timestamp)
            .inspect_err(|_| {
                // Unreachable while the active pointer only ever holds ids the
                // store handed out; surfaced instead of panicking regardless.
                warn!(conversation = %active_id, "active conversation missing during append");
            })
    }
}
