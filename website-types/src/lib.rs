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

//! Shared API types for the marketing website.
//!
//! This crate defines the contract between the contact endpoint and the
//! website form that posts to it. No web framework types live here.

pub mod requests;
pub mod responses;

pub use requests::ContactSubmission;
pub use responses::ContactResponse;

/// Path the contact endpoint is mounted on.
pub const CONTACT_PATH: &str = "/api/contact";
