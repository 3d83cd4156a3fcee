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

//! Response envelope returned by the contact endpoint.
//!
//! Every outcome, success or failure, is encoded the same way:
//!
//! ```json
//! { "success": true, "message": "Form submitted successfully" }
//! ```

use serde::{Deserialize, Serialize};

/// Body of every `/api/contact` response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_flat_envelope() {
        let json = serde_json::to_value(ContactResponse::error("nope")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "message": "nope" }));
    }
}
