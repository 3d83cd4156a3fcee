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

//! Shared application state passed to every Axum handler via `State`.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::inbox::{ContactInbox, LogInbox};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Where accepted submissions go.
    pub inbox: Arc<dyn ContactInbox>,
    /// Artificial processing time before a submission is acknowledged.
    pub simulated_delay: Duration,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_inbox(Arc::new(LogInbox), config)
    }

    pub fn with_inbox(inbox: Arc<dyn ContactInbox>, config: &Config) -> Self {
        Self {
            inbox,
            simulated_delay: config.simulated_delay,
        }
    }
}
