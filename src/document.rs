use serde::{Deserialize, Serialize};

/// A document whose text has been extracted and can ground answers.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoadedDocument {
    pub filename: String,
    pub file_type: String,
    pub content: String,
}

/// The single extracted-text context for the process.
///
/// At most one document is loaded at a time; `set` replaces the previous one
/// wholesale. `None` means nothing has been loaded yet, which is distinct
/// from a loaded document whose extracted text happens to be empty.
#[derive(Debug, Default)]
pub struct DocumentContext {
    document: Option<LoadedDocument>,
}

impl DocumentContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current document, returning a reference to it.
    pub fn set(&mut self, document: LoadedDocument) -> &LoadedDocument {
        self.document.insert(document)
    }

    pub fn clear(&mut self) {
        self.document = None;
    }

    pub fn get(&self) -> Option<&LoadedDocument> {
        self.document.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.document.as_ref().map(|d| d.content.as_str())
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }
}
