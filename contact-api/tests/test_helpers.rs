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

//! Shared test helpers for contact-api integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::response::Response;
use axum::Router;
use contact_api::config::Config;
use contact_api::inbox::{ContactInbox, InboxError};
use contact_api::{routes, state::AppState};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use website_types::ContactSubmission;

/// Inbox that counts deliveries and optionally fails every one of them.
#[derive(Default)]
pub struct RecordingInbox {
    pub delivered: AtomicUsize,
    pub fail: bool,
}

impl RecordingInbox {
    pub fn failing() -> Self {
        Self {
            delivered: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn count(&self) -> usize {
        self.delivered.load(Ordering::SeqCst)
    }
}

impl ContactInbox for RecordingInbox {
    fn deliver(&self, _submission: &ContactSubmission) -> Result<(), InboxError> {
        if self.fail {
            return Err(InboxError::Unavailable("test inbox refuses".to_string()));
        }
        self.delivered.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Build the router with the given inbox and delay, ready for `tower::ServiceExt::oneshot`.
pub fn build_app(inbox: Arc<RecordingInbox>, delay: Duration) -> Router {
    let config = Config {
        simulated_delay: delay,
        ..Config::default()
    };
    routes::router().with_state(AppState::with_inbox(inbox, &config))
}

/// Consume a response body and deserialize JSON into `T`.
pub async fn response_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("deserialize response body")
}
