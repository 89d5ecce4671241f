//! Letter generation pipeline: validate the form input, enrich it into
//! formal-letter prose, lay the prose out, and render the final PDF.
//!
//! One request runs as a single sequential pipeline; the only suspension
//! points are the enrichment call and the letterhead read. Concurrent
//! requests share nothing mutable.

pub mod handlers;
pub mod prompts;

use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::layout::{compose, split_zones};
use crate::llm_client::LlmClient;
use crate::models::expense::ExpenseRecord;
use crate::render::render_pdf;
use crate::state::AppState;

/// The enrichment call's structured output. Transient — consumed once by
/// the layout stage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnrichedLetter {
    pub topic: String,
    /// The full letter as newline-delimited logical lines.
    pub content: String,
}

/// Result of a successful pipeline run.
#[derive(Debug, Clone)]
pub struct GeneratedLetter {
    pub pdf: Vec<u8>,
    pub topic: String,
    /// True when body content was cut at the bottom margin.
    pub truncated: bool,
}

/// Calls the enrichment collaborator with the serialized record.
/// A malformed response is fatal for this render attempt — no partial
/// fallback.
pub async fn enrich_record(
    llm: &LlmClient,
    record: &ExpenseRecord,
) -> Result<EnrichedLetter, AppError> {
    let prompt = prompts::letter_prompt(record).map_err(|e| AppError::Internal(e.into()))?;
    let letter: EnrichedLetter = llm.call_json(&prompt, prompts::LETTER_SYSTEM).await?;
    Ok(letter)
}

/// Runs the full pipeline for one validated record:
/// enrich → split zones → compose page → load letterhead → render.
pub async fn generate_letter(
    state: &AppState,
    record: ExpenseRecord,
) -> Result<GeneratedLetter, AppError> {
    let letter = enrich_record(&state.llm, &record).await?;
    info!("Enriched expense record into letter: topic={:?}", letter.topic);

    let zones = split_zones(&letter.content);
    let page = compose(&zones);
    if page.truncated {
        warn!("Letter body exceeded the page; trailing lines were dropped");
    }

    let letterhead = tokio::fs::read(&state.config.letterhead_path)
        .await
        .map_err(|e| AppError::Asset(format!("{}: {e}", state.config.letterhead_path)))?;

    let pdf = render_pdf(&page, &letterhead)?;

    Ok(GeneratedLetter {
        pdf,
        topic: letter.topic,
        truncated: page.truncated,
    })
}
