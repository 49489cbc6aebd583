mod parser;

use crate::constants::*;
use crate::errors::ConfigError;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use std::time::Duration;

pub use parser::load_relay_config;

/// How the relay treats the caller's stored credential
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CredentialPolicy {
    /// Never consult the profile collaborator
    #[default]
    Skip,
    /// Require a valid stored key but do not send it upstream
    Validate,
    /// Require a valid stored key and send it as a bearer token
    Forward,
}

impl CredentialPolicy {
    pub fn resolves_key(self) -> bool {
        !matches!(self, CredentialPolicy::Skip)
    }

    pub fn forwards_key(self) -> bool {
        matches!(self, CredentialPolicy::Forward)
    }
}

impl FromStr for CredentialPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(CredentialPolicy::Skip),
            "validate" => Ok(CredentialPolicy::Validate),
            "forward" => Ok(CredentialPolicy::Forward),
            other => Err(format!(
                "unknown credential policy '{}', expected skip, validate or forward",
                other
            )),
        }
    }
}

/// Relay configuration, resolved once at startup and handed to the relay handler
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RelayConfig {
    /// Destination workflow webhook. Checked on every request.
    pub webhook_url: Option<String>,
    /// Credential lookup and forwarding behavior
    pub credentials: CredentialPolicy,
    /// Whether `chatSettings` is copied into the outbound payload
    pub include_chat_settings: bool,
    /// Upper bound for the single outbound call
    #[serde(deserialize_with = "deserialize_duration")]
    pub request_timeout: Duration,
    /// Maximum characters of upstream error text kept in the caller-facing message
    pub error_excerpt_limit: usize,
    /// Provider name passed to key validation
    pub provider_name: String,
    /// Key served by the static profile resolver
    pub api_key: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        RelayConfig {
            webhook_url: None,
            credentials: CredentialPolicy::Skip,
            include_chat_settings: false,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            error_excerpt_limit: DEFAULT_ERROR_EXCERPT_LIMIT,
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
            api_key: None,
        }
    }
}

impl RelayConfig {
    /// Applies overrides from a variable lookup, normally the process environment.
    ///
    /// # Arguments
    /// * `lookup` - Returns the value for a variable name, `None` when unset
    ///
    /// # Returns
    /// * `Result<(), ConfigError>` - Error when a present value cannot be parsed
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(WEBHOOK_URL_ENV) {
            self.webhook_url = Some(url);
        }
        if let Some(policy) = lookup(CREDENTIALS_ENV) {
            self.credentials = policy
                .parse()
                .map_err(|reason| ConfigError::InvalidValue {
                    key: CREDENTIALS_ENV,
                    reason,
                })?;
        }
        if let Some(flag) = lookup(INCLUDE_CHAT_SETTINGS_ENV) {
            self.include_chat_settings = parse_bool(&flag).ok_or_else(|| ConfigError::InvalidValue {
                key: INCLUDE_CHAT_SETTINGS_ENV,
                reason: format!("'{}' is not a boolean", flag),
            })?;
        }
        if let Some(timeout) = lookup(REQUEST_TIMEOUT_ENV) {
            self.request_timeout =
                humantime::parse_duration(timeout.trim()).map_err(|e| ConfigError::InvalidValue {
                    key: REQUEST_TIMEOUT_ENV,
                    reason: e.to_string(),
                })?;
        }
        if let Some(limit) = lookup(ERROR_EXCERPT_LIMIT_ENV) {
            self.error_excerpt_limit =
                limit
                    .trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                        key: ERROR_EXCERPT_LIMIT_ENV,
                        reason: e.to_string(),
                    })?;
        }
        if let Some(provider) = lookup(PROVIDER_NAME_ENV) {
            self.provider_name = provider;
        }
        if let Some(key) = lookup(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_omit_settings_and_skip_credentials() {
        let config = RelayConfig::default();
        assert!(config.webhook_url.is_none());
        assert_eq!(config.credentials, CredentialPolicy::Skip);
        assert!(!config.include_chat_settings);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.error_excerpt_limit, 500);
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = RelayConfig::default();
        let vars = env(&[
            ("RELAY_WEBHOOK_URL", "http://n8n.local/webhook/chat"),
            ("RELAY_CREDENTIALS", "Forward"),
            ("RELAY_INCLUDE_CHAT_SETTINGS", "yes"),
            ("RELAY_REQUEST_TIMEOUT", "2m"),
            ("RELAY_ERROR_EXCERPT_LIMIT", "64"),
        ]);
        config.apply_overrides(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(
            config.webhook_url.as_deref(),
            Some("http://n8n.local/webhook/chat")
        );
        assert_eq!(config.credentials, CredentialPolicy::Forward);
        assert!(config.include_chat_settings);
        assert_eq!(config.request_timeout, Duration::from_secs(120));
        assert_eq!(config.error_excerpt_limit, 64);
    }

    #[test]
    fn bad_override_is_reported_with_its_key() {
        let mut config = RelayConfig::default();
        let vars = env(&[("RELAY_REQUEST_TIMEOUT", "soon")]);
        let err = config.apply_overrides(|k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("RELAY_REQUEST_TIMEOUT"));
    }

    #[test]
    fn policy_flags() {
        assert!(!CredentialPolicy::Skip.resolves_key());
        assert!(CredentialPolicy::Validate.resolves_key());
        assert!(!CredentialPolicy::Validate.forwards_key());
        assert!(CredentialPolicy::Forward.forwards_key());
        assert!("maybe".parse::<CredentialPolicy>().is_err());
    }
}
