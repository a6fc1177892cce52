use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: .{0}")]
    UnsupportedType(String),
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF parse error: {0}")]
    Pdf(String),
}

/// Parsed document content
#[derive(Debug)]
pub struct ParsedDocument {
    pub content: String,
    pub file_type: String,
}

/// Parse a document file into plain text
pub fn parse_file(path: &Path) -> Result<ParsedDocument, ExtractionError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "txt" => {
            let content = fs::read_to_string(path)?;
            Ok(ParsedDocument {
                content,
                file_type: "txt".into(),
            })
        }
        "md" | "markdown" => {
            let content = fs::read_to_string(path)?;
            Ok(ParsedDocument {
                content,
                file_type: "md".into(),
            })
        }
        "pdf" => {
            let bytes = fs::read(path)?;
            let content = pdf_extract::extract_text_from_mem(&bytes)
                .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
            Ok(ParsedDocument {
                content,
                file_type: "pdf".into(),
            })
        }
        _ => Err(ExtractionError::UnsupportedType(ext)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension() {
        let err = parse_file(Path::new("notes.docx")).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedType(ext) if ext == "docx"));
    }

    #[test]
    fn test_missing_extension() {
        let err = parse_file(Path::new("notes")).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedType(ext) if ext.is_empty()));
    }

    #[test]
    fn test_reads_plain_text() {
        let path = std::env::temp_dir().join(format!("pdf_chat_{}.txt", std::process::id()));
        fs::write(&path, "The sky is blue.").unwrap();
        let parsed = parse_file(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(parsed.content, "The sky is blue.");
        assert_eq!(parsed.file_type, "txt");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let path = std::env::temp_dir().join(format!("pdf_chat_{}.MD", std::process::id()));
        fs::write(&path, "# heading").unwrap();
        let parsed = parse_file(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(parsed.file_type, "md");
    }
}
