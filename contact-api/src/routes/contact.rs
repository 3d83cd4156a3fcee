/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Handlers for the contact form endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use website_types::{ContactResponse, ContactSubmission};

use crate::error::AppError;
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully";

/// POST /api/contact
///
/// A body that fails to decode is reported as an internal error; the endpoint
/// has no client-error outcome.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(submission) =
        payload.map_err(|rejection| AppError::internal(&rejection.body_text()))?;

    tokio::time::sleep(state.simulated_delay).await;

    state
        .inbox
        .deliver(&submission)
        .map_err(|e| AppError::internal(&e.to_string()))?;

    Ok(Json(ContactResponse::ok(SUCCESS_MESSAGE)))
}

/// Any non-POST method on /api/contact.
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}
