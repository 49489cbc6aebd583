use crate::profile::CredentialError;

/// Failures a single relay call can end in. Every variant is terminal.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),
    #[error("Backend Webhook URL ({0}) is not configured.")]
    WebhookNotConfigured(&'static str),
    #[error("Backend Webhook URL ({setting}) is invalid: {reason}")]
    WebhookInvalid {
        setting: &'static str,
        reason: String,
    },
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error("{0}")]
    Transport(String),
    #[error("Backend Workflow Error: {status} {excerpt}")]
    Workflow { status: u16, excerpt: String },
    #[error("Unexpected response format from backend.")]
    UnexpectedResponse,
    #[error("{0}")]
    Internal(String),
}

impl RelayError {
    /// HTTP status code surfaced to the caller for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::InvalidRequest(_) => 400,
            RelayError::Credential(CredentialError::KeyNotFound) => 400,
            RelayError::Credential(CredentialError::KeyInvalid) => 401,
            RelayError::Workflow { status, .. } if (400..=599).contains(status) => *status,
            _ => 500,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    /// Keeps the cause chain and drops the URL, webhook paths act as secrets.
    fn from(e: reqwest::Error) -> Self {
        let e = e.without_url();
        let mut message = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.ends_with(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = std::error::Error::source(cause);
        }
        RelayError::Transport(message)
    }
}

/// Startup configuration failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Toml error: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}
