use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if either collaborator API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub llama_parse_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Front-end origins allowed by CORS. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    /// Directory that holds uploaded documents while they are being parsed.
    pub temp_dir: PathBuf,
    /// Largest accepted `/summary/generate` body, base64 overhead included.
    pub max_body_bytes: usize,
}

/// 25 MiB of JSON, enough for an ~18 MiB PDF once base64-encoded.
pub const DEFAULT_MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: require_env("GOOGLE_API_KEY")?,
            llama_parse_api_key: require_env("LLAMA_PARSE_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cors_allowed_origins: parse_origins(
                &std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
            ),
            temp_dir: std::env::var("SRS_TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| std::env::temp_dir()),
            max_body_bytes: match std::env::var("MAX_BODY_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_BODY_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_BODY_BYTES,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

/// Splits a comma-separated origin list, dropping blanks and trailing slashes.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_empty() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ,").is_empty());
    }

    #[test]
    fn test_parse_origins_list() {
        let origins = parse_origins("http://localhost:3000/, https://srs.example.com");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "https://srs.example.com"]
        );
    }
}
