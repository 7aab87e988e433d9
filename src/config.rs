// ABOUTME: Environment-driven runtime configuration for the drafting service
// ABOUTME: Covers model selection, default jurisdiction, and LLM request timeout

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

//! # Configuration
//!
//! Runtime settings are read from environment variables with sensible
//! defaults, so an unconfigured process still works against the default
//! model and jurisdiction. The Gemini API key itself is read separately by
//! the provider ([`crate::llm::GeminiProvider::from_env`]).

use std::env;
use std::time::Duration;

use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::llm::gemini::DEFAULT_MODEL;
use crate::wizard::DEFAULT_REGION;

/// Override for the generation model name
pub const MODEL_ENV: &str = "STAMPDESK_MODEL";
/// Override for the default jurisdiction/region string
pub const REGION_ENV: &str = "STAMPDESK_REGION";
/// Override for the LLM request timeout, in whole seconds
pub const LLM_TIMEOUT_ENV: &str = "STAMPDESK_LLM_TIMEOUT_SECS";

const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

/// Runtime configuration for the drafting service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Generation model name passed to the provider
    pub model: String,
    /// Jurisdiction seeded into new wizard sessions
    pub default_region: String,
    /// Upper bound on a single LLM request, including streaming
    pub llm_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_owned(),
            default_region: DEFAULT_REGION.to_owned(),
            llm_timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset variables.
    ///
    /// # Errors
    ///
    /// Returns a config error if the timeout variable is set but is not a
    /// positive integer number of seconds.
    pub fn from_env() -> AppResult<Self> {
        let model = env_var_or(MODEL_ENV, DEFAULT_MODEL);
        let default_region = env_var_or(REGION_ENV, DEFAULT_REGION);

        let llm_timeout = match env::var(LLM_TIMEOUT_ENV) {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AppError::config(format!(
                        "{LLM_TIMEOUT_ENV} must be a positive integer number of seconds, got '{raw}'"
                    ))
                })?;
                if secs == 0 {
                    return Err(AppError::config(format!("{LLM_TIMEOUT_ENV} must be non-zero")));
                }
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
        };

        let config = Self {
            model,
            default_region,
            llm_timeout,
        };
        info!(
            model = %config.model,
            region = %config.default_region,
            timeout_secs = config.llm_timeout.as_secs(),
            "Configuration loaded"
        );
        Ok(config)
    }
}

fn env_var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_from_env_reads_region_override() {
        env::set_var(REGION_ENV, "Goa, India");
        let config = ServiceConfig::from_env().unwrap();
        env::remove_var(REGION_ENV);
        assert_eq!(config.default_region, "Goa, India");
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = ServiceConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.default_region, "Maharashtra, India");
        assert_eq!(config.llm_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_env_var_or_ignores_blank_values() {
        // Unset and blank behave identically.
        assert_eq!(env_var_or("STAMPDESK_TEST_UNSET_VAR", "fallback"), "fallback");
    }
}
