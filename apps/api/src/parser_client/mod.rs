//! Document parser client: the only module that talks to LlamaParse.
//!
//! A parse is a three-step job: upload the file, poll the job until it settles,
//! then fetch the per-page result. Pages come back in document order.

use std::path::Path;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{multipart, Client};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

#[cfg(test)]
pub mod mock;

const LLAMA_PARSE_API_BASE: &str = "https://api.cloud.llamaindex.ai/api/parsing";
const PARSE_LANGUAGE: &str = "en";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const POLL_INTERVAL: Duration = Duration::from_secs(1);
const MAX_JOB_WAIT: Duration = Duration::from_secs(300);

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse job {job_id} ended with status {status}")]
    JobFailed { job_id: String, status: String },

    #[error("Parse job {job_id} did not finish within {waited_secs}s")]
    Timeout { job_id: String, waited_secs: u64 },
}

/// One page of extracted document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    pub text: String,
}

impl ParsedPage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Turns a document on disk into ordered page texts.
#[async_trait]
pub trait DocumentParser: Send + Sync {
    async fn parse(&self, document: &Path) -> Result<Vec<ParsedPage>, ParserError>;
}

#[derive(Debug, Deserialize)]
struct JobStatus {
    id: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct JsonResult {
    #[serde(default)]
    pages: Vec<JsonPage>,
}

#[derive(Debug, Deserialize)]
struct JsonPage {
    #[serde(default)]
    text: String,
    md: Option<String>,
}

impl JsonPage {
    /// Markdown rendition when the parser produced one, plain text otherwise.
    fn into_page(self) -> ParsedPage {
        match self.md {
            Some(md) if !md.trim().is_empty() => ParsedPage::new(md),
            _ => ParsedPage::new(self.text),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum JobState {
    Pending,
    Done,
    Failed,
}

fn job_state(status: &str) -> JobState {
    match status {
        "SUCCESS" | "PARTIAL_SUCCESS" => JobState::Done,
        "ERROR" | "CANCELED" | "CANCELLED" => JobState::Failed,
        _ => JobState::Pending,
    }
}

#[derive(Clone)]
pub struct LlamaParseClient {
    client: Client,
    api_key: String,
    base_url: String,
    poll_interval: Duration,
    max_wait: Duration,
}

impl LlamaParseClient {
    pub fn new(api_key: String) -> Result<Self, ParserError> {
        Self::with_base_url(api_key, LLAMA_PARSE_API_BASE.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ParserError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_interval: POLL_INTERVAL,
            max_wait: MAX_JOB_WAIT,
        })
    }

    async fn upload(&self, document: &Path) -> Result<JobStatus, ParserError> {
        let bytes = tokio::fs::read(document).await?;
        let file_name = document
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")?;
        let form = multipart::Form::new()
            .text("language", PARSE_LANGUAGE)
            .part("file", part);

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;
        read_json(response).await
    }

    async fn job_status(&self, job_id: &str) -> Result<JobStatus, ParserError> {
        let response = self
            .client
            .get(format!("{}/job/{job_id}", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        read_json(response).await
    }

    async fn wait_for_job(&self, job: JobStatus) -> Result<(), ParserError> {
        let started = Instant::now();
        let mut status = job.status;
        loop {
            match job_state(&status) {
                JobState::Done => return Ok(()),
                JobState::Failed => {
                    return Err(ParserError::JobFailed {
                        job_id: job.id,
                        status,
                    })
                }
                JobState::Pending => {}
            }

            if started.elapsed() >= self.max_wait {
                return Err(ParserError::Timeout {
                    job_id: job.id,
                    waited_secs: started.elapsed().as_secs(),
                });
            }
            tokio::time::sleep(self.poll_interval).await;
            status = self.job_status(&job.id).await?.status;
            debug!(job_id = %job.id, %status, "Polled parse job");
        }
    }

    async fn fetch_pages(&self, job_id: &str) -> Result<Vec<ParsedPage>, ParserError> {
        let response = self
            .client
            .get(format!("{}/job/{job_id}/result/json", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let result: JsonResult = read_json(response).await?;
        Ok(result.pages.into_iter().map(JsonPage::into_page).collect())
    }
}

#[async_trait]
impl DocumentParser for LlamaParseClient {
    async fn parse(&self, document: &Path) -> Result<Vec<ParsedPage>, ParserError> {
        let job = self.upload(document).await?;
        let job_id = job.id.clone();
        info!(%job_id, "Uploaded document to LlamaParse");

        self.wait_for_job(job).await?;
        let pages = self.fetch_pages(&job_id).await?;
        info!(%job_id, pages = pages.len(), "LlamaParse job finished");
        Ok(pages)
    }
}

/// Decodes a JSON body, turning non-2xx responses into `ParserError::Api`.
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ParserError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ParserError::Api {
            status: status.as_u16(),
            message: api_error_message(body),
        });
    }
    Ok(response.json().await?)
}

#[derive(Debug, Deserialize)]
struct LlamaError {
    detail: serde_json::Value,
}

fn api_error_message(body: String) -> String {
    match serde_json::from_str::<LlamaError>(&body) {
        Ok(LlamaError {
            detail: serde_json::Value::String(detail),
        }) => detail,
        Ok(LlamaError { detail }) => detail.to_string(),
        Err(_) => body,
    }
}
