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

//! Destination for accepted contact submissions.
//!
//! Nothing is stored or sent anywhere; [`LogInbox`] only records that a
//! submission arrived.

use thiserror::Error;
use website_types::ContactSubmission;

#[derive(Debug, Error)]
pub enum InboxError {
    #[error("inbox unavailable: {0}")]
    Unavailable(String),
}

/// Receives submissions once the simulated processing delay has elapsed.
pub trait ContactInbox: Send + Sync {
    fn deliver(&self, submission: &ContactSubmission) -> Result<(), InboxError>;
}

/// Default inbox: logs the sender and message length.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogInbox;

impl ContactInbox for LogInbox {
    fn deliver(&self, submission: &ContactSubmission) -> Result<(), InboxError> {
        tracing::info!(
            "Contact form submission from {:?} <{}> ({} chars)",
            submission.name,
            submission.email,
            submission.message.chars().count()
        );
        Ok(())
    }
}
