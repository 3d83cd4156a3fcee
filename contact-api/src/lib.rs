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

//! Mock contact form endpoint.
//!
//! This crate provides the Axum router, application state and configuration
//! for `POST /api/contact`. The website's SSR server merges [`routes::router`]
//! into its own router; `main.rs` serves it standalone.

pub mod config;
pub mod error;
pub mod inbox;
pub mod routes;
pub mod state;
