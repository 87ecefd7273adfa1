//! Document ingestion: decode the uploaded content, stage it as a transient
//! file, hand it to the parser, and join the returned pages.
//!
//! The transient file lives exactly as long as one parse call. Its name carries
//! the request id, so concurrent uploads never share a path.

use std::path::Path;

use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::ContentEncoding;
use crate::parser_client::{DocumentParser, ParsedPage};

/// An uploaded document staged on disk. Removed on drop.
pub struct TransientDocument {
    file: NamedTempFile,
}

impl TransientDocument {
    pub async fn create(dir: &Path, request_id: Uuid, bytes: &[u8]) -> std::io::Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(&format!("srs-{request_id}-"))
            .suffix(".pdf")
            .tempfile_in(dir)?;
        tokio::fs::write(file.path(), bytes).await?;
        debug!(path = %file.path().display(), size = bytes.len(), "Staged transient document");
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Removes the file now instead of at drop, so a failed removal gets logged.
    pub fn close(self) {
        let path = self.file.path().to_path_buf();
        match self.file.close() {
            Ok(()) => debug!(path = %path.display(), "Transient document removed"),
            Err(e) => warn!(path = %path.display(), "Failed to remove transient document: {e}"),
        }
    }
}

/// Decodes uploaded content into raw document bytes.
///
/// With no explicit encoding the content is tried as base64 first and then
/// taken as latin-1 text, one byte per character. Base64 may be line-wrapped.
pub fn decode_content(content: &str, encoding: Option<ContentEncoding>) -> Result<Vec<u8>, AppError> {
    match encoding {
        Some(ContentEncoding::Base64) => decode_base64(content)
            .map_err(|e| AppError::Validation(format!("content is not valid base64: {e}"))),
        Some(ContentEncoding::Latin1) => encode_latin1(content).ok_or_else(latin1_error),
        None => match decode_base64(content) {
            Ok(bytes) => Ok(bytes),
            Err(_) => {
                debug!("content is not base64, falling back to latin-1");
                encode_latin1(content).ok_or_else(latin1_error)
            }
        },
    }
}

/// Standard base64 with all ASCII whitespace ignored (MIME/PEM wrapping, CRLF).
fn decode_base64(content: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: String = content.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD.decode(compact)
}

fn encode_latin1(content: &str) -> Option<Vec<u8>> {
    content.chars().map(|c| u8::try_from(u32::from(c)).ok()).collect()
}

fn latin1_error() -> AppError {
    AppError::Validation(
        "content is neither base64 nor latin-1 text (characters above U+00FF found)".to_string(),
    )
}

/// Joins page texts with a newline, preserving page order.
pub fn combine_pages(pages: &[ParsedPage]) -> String {
    pages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stages `bytes`, parses them, and returns the combined document text.
/// The staged file is gone when this returns, whatever the outcome.
pub async fn ingest_document(
    parser: &dyn DocumentParser,
    temp_dir: &Path,
    request_id: Uuid,
    bytes: &[u8],
) -> Result<String, AppError> {
    let document = TransientDocument::create(temp_dir, request_id, bytes)
        .await
        .context("Failed to stage uploaded document")?;

    let pages = match parser.parse(document.path()).await {
        Ok(pages) => pages,
        Err(e) => {
            document.close();
            return Err(AppError::DocumentParsing(format!("PDF parsing failed: {e}")));
        }
    };
    document.close();

    debug!("Parsed document into {} pages", pages.len());
    Ok(combine_pages(&pages))
}
