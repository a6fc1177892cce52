//! Grounded-answer prompt construction.
//!
//! Grounding is enforced entirely through instruction: the backend is told to
//! answer only from the embedded text and is trusted to comply. Nothing here
//! verifies the answer afterwards.

/// Fixed reply the backend is instructed to give when the document does not
/// contain the answer.
pub const NO_INFORMATION_SENTINEL: &str = "No information exists.";

/// Compose the prompt binding a user query to the uploaded document text.
///
/// Pure function of its two inputs: the same (document, query) pair always
/// yields the same prompt. The document text is embedded verbatim between
/// the fences.
pub fn build_prompt(document_text: &str, query: &str) -> String {
    format!(
        "You are a PDF content assistant. The following text is extracted from a PDF document:\n\
         ---\n\
         {document_text}\n\
         ---\n\
         Answer the user's query based on the above content. If the answer is not found, reply with '{NO_INFORMATION_SENTINEL}'\n\
         Query: {query}"
    )
}
