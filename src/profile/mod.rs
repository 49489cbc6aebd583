//! Credential collaborator seam.
//!
//! The relay only needs two things from whoever owns user profiles: the
//! caller's stored API key, and a verdict on whether that key is usable for a
//! given provider. Failures come back as a typed [`CredentialError`] so the
//! relay never has to inspect message text.

use async_trait::async_trait;
use std::fmt::Debug;

mod static_profile;

pub use static_profile::StaticProfileResolver;

/// Caller identity as far as the relay is concerned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("API Key not found. Please set it in your profile settings.")]
    KeyNotFound,
    #[error("API Key is incorrect. Please fix it in your profile settings.")]
    KeyInvalid,
    #[error("{0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ProfileResolver: Debug + Send + Sync {
    /// Looks up the profile of the current caller.
    async fn resolve_profile(&self) -> Result<Profile, CredentialError>;

    /// Checks a stored key for `provider_name` and returns it when usable.
    fn validate_api_key(
        &self,
        key: Option<&str>,
        provider_name: &str,
    ) -> Result<String, CredentialError>;
}
