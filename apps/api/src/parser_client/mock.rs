//! In-process `DocumentParser` for tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{DocumentParser, ParsedPage, ParserError};

/// What the parser saw when it was called.
#[derive(Debug, Clone)]
pub struct SeenDocument {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

pub struct MockParser {
    pages: Result<Vec<String>, String>,
    seen: Mutex<Vec<SeenDocument>>,
}

impl MockParser {
    pub fn with_pages(pages: &[&str]) -> Self {
        Self {
            pages: Ok(pages.iter().map(|p| p.to_string()).collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            pages: Err(message.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<SeenDocument> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentParser for MockParser {
    async fn parse(&self, document: &Path) -> Result<Vec<ParsedPage>, ParserError> {
        let bytes = tokio::fs::read(document).await?;
        self.seen.lock().unwrap().push(SeenDocument {
            path: document.to_path_buf(),
            bytes,
        });

        match &self.pages {
            Ok(pages) => Ok(pages.iter().map(|p| ParsedPage::new(p.as_str())).collect()),
            Err(message) => Err(ParserError::Api {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}
