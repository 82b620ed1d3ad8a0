use config::{Config, ConfigError};
use dotenv::dotenv;
use secrecy::{ExposeSecret, SecretString};

use crate::config::credential::Credential;

pub const DEEPINFRA_API_KEY_PLACEHOLDER: &str = "RGcJ063FZOSHIRLKq822sdFSDCxBvXvi";
pub const SERPAPI_KEY_PLACEHOLDER: &str =
    "7a51f9ef1b1bd7a8c8d4a854ef8f0256ff5153221fd8a78b1c13e86182441f93";

pub const DEFAULT_API_URL: &str = "https://api.deepinfra.com/v1/openai/chat/completions";
pub const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com/search";
pub const DEFAULT_MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";
pub const DEFAULT_FALLBACK_MODEL: &str = "meta-llama/Llama-2-7b-chat-hf";

const ENV_PREFIX: &str = "ASSISTANT";

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub deepinfra_api_key: SecretString,
    /// OpenAI-compatible chat completions endpoint
    pub api_url: String,
    pub serpapi_key: SecretString,
    pub serpapi_url: String,
    pub default_model: String,
    pub fallback_model: String,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            deepinfra_api_key: SecretString::from(DEEPINFRA_API_KEY_PLACEHOLDER.to_string()),
            api_url: DEFAULT_API_URL.to_string(),
            serpapi_key: SecretString::from(SERPAPI_KEY_PLACEHOLDER.to_string()),
            serpapi_url: DEFAULT_SERPAPI_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            fallback_model: DEFAULT_FALLBACK_MODEL.to_string(),
        }
    }

    pub fn with_deepinfra_api_key(mut self, key: impl Into<String>) -> Self {
        self.deepinfra_api_key = SecretString::from(key.into());
        self
    }

    pub fn with_serpapi_key(mut self, key: impl Into<String>) -> Self {
        self.serpapi_key = SecretString::from(key.into());
        self
    }

    /// True once both API keys hold something other than their shipped placeholders.
    pub fn is_configured(&self) -> bool {
        is_real_key(&self.deepinfra_api_key, DEEPINFRA_API_KEY_PLACEHOLDER)
            && is_real_key(&self.serpapi_key, SERPAPI_KEY_PLACEHOLDER)
    }

    /// Credentials that are still empty or set to their placeholder.
    pub fn missing_credentials(&self) -> Vec<Credential> {
        let mut missing = Vec::new();
        if !is_real_key(&self.deepinfra_api_key, DEEPINFRA_API_KEY_PLACEHOLDER) {
            missing.push(Credential::DeepInfra);
        }
        if !is_real_key(&self.serpapi_key, SERPAPI_KEY_PLACEHOLDER) {
            missing.push(Credential::SerpApi);
        }
        missing
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

// Empty is checked first; placeholders compare by exact equality.
fn is_real_key(key: &SecretString, placeholder: &str) -> bool {
    let key = key.expose_secret();
    !key.is_empty() && key != placeholder
}

/// Loads settings from the built-in defaults, overridden by `ASSISTANT__*`
/// environment variables (a `.env` file is honoured if present).
pub fn get_config() -> Result<Settings, ConfigError> {
    dotenv().ok();

    build_settings(assistant_environment())
}

/// `ASSISTANT__<FIELD>` variables, e.g. `ASSISTANT__SERPAPI_KEY`.
pub fn assistant_environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
}

pub fn build_settings(environment: config::Environment) -> Result<Settings, ConfigError> {
    let defaults = Settings::new();
    let config = Config::builder()
        .set_default("deepinfra_api_key", defaults.deepinfra_api_key.expose_secret())?
        .set_default("api_url", defaults.api_url)?
        .set_default("serpapi_key", defaults.serpapi_key.expose_secret())?
        .set_default("serpapi_url", defaults.serpapi_url)?
        .set_default("default_model", defaults.default_model)?
        .set_default("fallback_model", defaults.fallback_model)?
        .add_source(environment)
        .build()?;

    config.try_deserialize::<Settings>()
}
