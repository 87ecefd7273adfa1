use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Sends one composed prompt to the LLM and returns its text.
///
/// Failures become `AppError::Llm` prefixed with `stage`, e.g.
/// "Failed to analyze risks: HTTP error: ...". Blank output counts as a failure.
pub async fn invoke(llm: &dyn TextGenerator, prompt: &str, stage: &str) -> Result<String, AppError> {
    debug!(prompt_len = prompt.len(), "{stage}: invoking LLM");

    let text = llm
        .generate(prompt)
        .await
        .map_err(|e| AppError::Llm(format!("{stage}: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::Llm(format!("{stage}: LLM returned empty content")));
    }

    debug!(output_len = text.len(), "{stage}: LLM call succeeded");
    Ok(text)
}
