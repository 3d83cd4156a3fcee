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

//! Application error type that implements Axum's `IntoResponse`.
//!
//! Every error is returned as a [`ContactResponse`] with `success: false`,
//! paired with the appropriate HTTP status code.

use axum::{
    http::{header::ALLOW, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use website_types::ContactResponse;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error that pairs an HTTP status code with a client-facing message.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
    }

    /// The detail is logged only; clients always see the generic message.
    pub fn internal(detail: &str) -> Self {
        tracing::error!("Contact submission failed: {detail}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ContactResponse::error(self.message);
        let mut response = (self.status, Json(body)).into_response();
        if self.status == StatusCode::METHOD_NOT_ALLOWED {
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}
