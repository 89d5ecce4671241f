//! Axum route handlers for the Letter API.

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::letter::generate_letter;
use crate::models::expense::{find_identity, ExpenseRecord, Identity, DIRECTORS};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LetterRequest {
    /// Director NIC or exact full name.
    pub expender: String,
    pub amount: f64,
    pub reason: String,
    #[serde(default)]
    pub additional_info: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/letters
///
/// Full pipeline: validate → enrich → split/layout → render. Returns the
/// PDF as a downloadable attachment with a fixed filename. Truncated body
/// content is signalled via the `X-Letter-Truncated` header.
pub async fn handle_create_letter(
    State(state): State<AppState>,
    Json(request): Json<LetterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let record = validate_request(request)?;
    let letter = generate_letter(&state, record).await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"expense-letter.pdf\""),
    );
    if letter.truncated {
        headers.insert("x-letter-truncated", HeaderValue::from_static("true"));
    }

    Ok((headers, letter.pdf))
}

/// GET /api/v1/identities
///
/// The static director table backing the form's person selector.
pub async fn handle_list_identities() -> Json<Vec<Identity>> {
    Json(DIRECTORS.to_vec())
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

/// Checks every form field before any network call is made. The original
/// form let empty fields through to the enrichment call; here they are
/// explicit validation errors.
fn validate_request(request: LetterRequest) -> Result<ExpenseRecord, AppError> {
    let identity = find_identity(request.expender.trim()).ok_or_else(|| {
        AppError::Validation(format!("Unknown expending person '{}'", request.expender))
    })?;

    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(AppError::Validation(
            "amount must be a positive number".to_string(),
        ));
    }

    if request.reason.trim().is_empty() {
        return Err(AppError::Validation("reason cannot be empty".to_string()));
    }

    let date = NaiveDate::parse_from_str(request.date.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!(
            "date '{}' is not a valid YYYY-MM-DD date",
            request.date
        ))
    })?;

    Ok(ExpenseRecord {
        expense_made_by: identity.name.to_string(),
        amount: request.amount,
        reason: request.reason.trim().to_string(),
        additional_info: request.additional_info.trim().to_string(),
        date,
    })
}
