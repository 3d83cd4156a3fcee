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

//! Axum router configuration for the contact endpoint.

pub mod contact;

use axum::{routing::post, Router};
use website_types::CONTACT_PATH;

use crate::state::AppState;

/// Build the router. Any method other than POST on the contact path is answered
/// with the JSON 405 body rather than Axum's empty default.
pub fn router() -> Router<AppState> {
    Router::new().route(
        CONTACT_PATH,
        post(contact::submit).fallback(contact::method_not_allowed),
    )
}
