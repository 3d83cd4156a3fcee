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

//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8082";
const DEFAULT_SIMULATED_DELAY_MS: u64 = 1000;

/// Configuration for the contact endpoint.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server when run standalone (e.g. "0.0.0.0:8082").
    pub listen_addr: String,
    /// Artificial processing time applied to every accepted submission.
    pub simulated_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            simulated_delay: Duration::from_millis(DEFAULT_SIMULATED_DELAY_MS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:8082"`)
    /// - `CONTACT_SIMULATED_DELAY_MS` (default: `"1000"`)
    pub fn from_env() -> Result<Self, String> {
        let listen_addr =
            env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let delay_ms = match env::var("CONTACT_SIMULATED_DELAY_MS") {
            Ok(raw) => parse_delay_ms(&raw)?,
            Err(_) => DEFAULT_SIMULATED_DELAY_MS,
        };

        Ok(Self {
            listen_addr,
            simulated_delay: Duration::from_millis(delay_ms),
        })
    }
}

fn parse_delay_ms(raw: &str) -> Result<u64, String> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| "CONTACT_SIMULATED_DELAY_MS must be a non-negative integer".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_one_second() {
        assert_eq!(Config::default().simulated_delay, Duration::from_secs(1));
    }

    #[test]
    fn delay_parsing_accepts_whitespace_and_rejects_negatives() {
        assert_eq!(parse_delay_ms(" 250 "), Ok(250));
        assert!(parse_delay_ms("-5").is_err());
        assert!(parse_delay_ms("soon").is_err());
    }
}
