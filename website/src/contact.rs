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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Browser side of the contact form: posts a [`ContactSubmission`] as JSON to
//! the contact endpoint and decodes the [`ContactResponse`].

use thiserror::Error;
use website_types::{ContactResponse, ContactSubmission};

/// Published address, split so neither half alone looks like an email.
pub const CONTACT_USER: &str = "info";
pub const CONTACT_DOMAIN: &str = "securityunion.dev";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("the contact form only works in the browser")]
    Unavailable,
    #[error("could not reach the server: {0}")]
    Request(String),
    #[error("unexpected response from the server: {0}")]
    Decode(String),
}

/// Text shown under the form once a submission settles.
pub fn outcome_message(outcome: &Result<ContactResponse, ContactFormError>) -> String {
    match outcome {
        Ok(response) => response.message.clone(),
        Err(e) => e.to_string(),
    }
}

#[cfg(feature = "hydrate")]
pub async fn post_contact(
    submission: ContactSubmission,
) -> Result<ContactResponse, ContactFormError> {
    use website_types::CONTACT_PATH;

    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .ok_or(ContactFormError::Unavailable)?;

    // Non-2xx answers still carry a ContactResponse body, so the status is not checked.
    let response = reqwest::Client::new()
        .post(format!("{origin}{CONTACT_PATH}"))
        .json(&submission)
        .send()
        .await
        .map_err(|e| ContactFormError::Request(e.to_string()))?;

    response
        .json::<ContactResponse>()
        .await
        .map_err(|e| ContactFormError::Decode(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
pub async fn post_contact(
    _submission: ContactSubmission,
) -> Result<ContactResponse, ContactFormError> {
    Err(ContactFormError::Unavailable)
}
