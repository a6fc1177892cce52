use crate::doc_processor::ExtractionError;
use crate::llm::LlmError;

/// Everything a session operation can fail with. All variants are
/// recoverable; the caller turns them into user-visible messages.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No document loaded. Upload a document before asking questions.")]
    NoDocumentLoaded,
    #[error("No active conversation. Start a new conversation before asking questions.")]
    NoActiveConversation,
    #[error("Unknown conversation: {0}")]
    NotFound(String),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl serde::Serialize for SessionError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
