//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base service configuration used for logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load `.env` (if present), then read the environment.
    pub fn from_env_file() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }
}

/// How failures are rendered when they leave the process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResponseConfig {
    /// Hide the text of unclassified errors from clients
    pub redact_unclassified: bool,
    /// Message sent instead of a redacted error
    pub unclassified_message: String,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            redact_unclassified: true,
            unclassified_message: "An internal error occurred".to_string(),
        }
    }
}

impl ResponseConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load `.env` (if present), then read the environment.
    pub fn from_env_file() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            redact_unclassified: lookup("RESPONSE_REDACT_UNCLASSIFIED")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.redact_unclassified),
            unclassified_message: lookup("RESPONSE_UNCLASSIFIED_MESSAGE")
                .unwrap_or(defaults.unclassified_message),
        }
    }

    /// Text a client sees for an unclassified error.
    pub fn unclassified_text(&self, error: &dyn std::fmt::Display) -> String {
        if self.redact_unclassified {
            self.unclassified_message.clone()
        } else {
            error.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_service_config_defaults() {
        let config = ServiceConfig::from_lookup(|_| None);
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_service_config_overrides() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("SERVICE_NAME", "billing"),
            ("LOG_LEVEL", "debug"),
        ]));

        assert_eq!(config.service_name, "billing");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_response_config_parsing() {
        let config = ResponseConfig::from_lookup(lookup_from(&[
            ("RESPONSE_REDACT_UNCLASSIFIED", "false"),
            ("RESPONSE_UNCLASSIFIED_MESSAGE", "oops"),
        ]));

        assert!(!config.redact_unclassified);
        assert_eq!(config.unclassified_message, "oops");
    }

    #[test]
    fn test_response_config_ignores_bad_bool() {
        let config =
            ResponseConfig::from_lookup(lookup_from(&[("RESPONSE_REDACT_UNCLASSIFIED", "maybe")]));
        assert!(config.redact_unclassified);
    }

    #[test]
    fn test_unclassified_text() {
        let redacting = ResponseConfig::default();
        assert_eq!(
            redacting.unclassified_text(&"db password leaked"),
            "An internal error occurred"
        );

        let verbose = ResponseConfig {
            redact_unclassified: false,
            ..ResponseConfig::default()
        };
        assert_eq!(verbose.unclassified_text(&"socket closed"), "socket closed");
    }
}
