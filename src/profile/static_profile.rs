use super::{CredentialError, Profile, ProfileResolver};
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use tracing::debug;

/// Profile resolver backed by a single key taken from configuration
#[derive(Debug, Clone, Default)]
pub struct StaticProfileResolver {
    api_key: Option<String>,
}

impl StaticProfileResolver {
    /// Creates a resolver that always returns the given key.
    ///
    /// # Arguments
    /// * `api_key` - Key to hand out, `None` when no key is stored
    pub fn new(api_key: Option<String>) -> Self {
        StaticProfileResolver { api_key }
    }
}

#[async_trait]
impl ProfileResolver for StaticProfileResolver {
    async fn resolve_profile(&self) -> Result<Profile, CredentialError> {
        Ok(Profile {
            api_key: self.api_key.clone(),
        })
    }

    fn validate_api_key(
        &self,
        key: Option<&str>,
        provider_name: &str,
    ) -> Result<String, CredentialError> {
        let key = match key.map(str::trim) {
            Some(k) if !k.is_empty() => k,
            _ => {
                debug!("No {} API key stored for caller", provider_name);
                return Err(CredentialError::KeyNotFound);
            }
        };

        // The key ends up in an Authorization header.
        if key.chars().any(char::is_whitespace)
            || HeaderValue::from_str(&format!("Bearer {}", key)).is_err()
        {
            debug!("Stored {} API key is malformed", provider_name);
            return Err(CredentialError::KeyInvalid);
        }

        Ok(key.to_string())
    }
}
