use std::time::Duration;

/// Environment variable holding the workflow webhook URL
pub const WEBHOOK_URL_ENV: &str = "RELAY_WEBHOOK_URL";

/// Environment variable selecting the credential policy (skip, validate, forward)
pub const CREDENTIALS_ENV: &str = "RELAY_CREDENTIALS";

/// Environment variable toggling whether chatSettings is forwarded
pub const INCLUDE_CHAT_SETTINGS_ENV: &str = "RELAY_INCLUDE_CHAT_SETTINGS";

/// Environment variable holding the outbound request timeout (e.g. "30s")
pub const REQUEST_TIMEOUT_ENV: &str = "RELAY_REQUEST_TIMEOUT";

/// Environment variable bounding the upstream error excerpt length
pub const ERROR_EXCERPT_LIMIT_ENV: &str = "RELAY_ERROR_EXCERPT_LIMIT";

/// Environment variable naming the provider the stored key belongs to
pub const PROVIDER_NAME_ENV: &str = "RELAY_PROVIDER_NAME";

/// Environment variable holding the caller API key for the static profile resolver
pub const API_KEY_ENV: &str = "RELAY_API_KEY";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of characters of upstream error text echoed to the caller
pub const DEFAULT_ERROR_EXCERPT_LIMIT: usize = 500;

pub const DEFAULT_PROVIDER_NAME: &str = "openai";

/// Route served by the relay handler
pub const CHAT_ROUTE: &str = "/api/chat/openai";

/// OpenAI-style alias for the relay route
pub const CHAT_COMPLETIONS_ROUTE: &str = "/v1/chat/completions";
