//! Document-grounded chat sessions: load a document, open independent
//! conversation threads, and ask questions answered only from the extracted
//! text.

pub mod doc_processor;
pub mod document;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod session;
pub mod settings;
pub mod store;

pub use document::{DocumentContext, LoadedDocument};
pub use error::SessionError;
pub use llm::{GenerationClient, LlmError, ModelClient, Provider};
pub use session::ChatSession;
pub use settings::AppSettings;
pub use store::models::{Conversation, Message};
pub use store::ConversationStore;
