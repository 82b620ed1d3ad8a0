use config::ConfigError;
use thiserror::Error as ThisError;

use crate::config::credential::Credential;
use crate::config::settings::Settings;

#[derive(Debug, ThisError)]
pub enum StartupError {
    #[error("Failed to load settings: {0}")]
    Config(#[from] ConfigError),

    #[error("Missing credentials: {}", format_credentials(.0))]
    MissingCredentials(Vec<Credential>),
}

fn format_credentials(credentials: &[Credential]) -> String {
    credentials
        .iter()
        .map(|credential| format!("{} ({})", credential, credential.env_var()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Refuse to start while either API key is still a placeholder.
pub fn ensure_configured(settings: &Settings) -> Result<(), StartupError> {
    if settings.is_configured() {
        tracing::info!(
            api_url = %settings.api_url,
            serpapi_url = %settings.serpapi_url,
            default_model = %settings.default_model,
            fallback_model = %settings.fallback_model,
            "Assistant settings loaded"
        );
        return Ok(());
    }

    let missing = settings.missing_credentials();
    for credential in &missing {
        tracing::warn!(
            "{} is not set. Provide it through {}.",
            credential,
            credential.env_var()
        );
    }
    Err(StartupError::MissingCredentials(missing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_lists_env_vars() {
        let err = StartupError::MissingCredentials(vec![Credential::DeepInfra, Credential::SerpApi]);
        assert_eq!(
            err.to_string(),
            "Missing credentials: DeepInfra API key (ASSISTANT__DEEPINFRA_API_KEY), \
             SerpAPI key (ASSISTANT__SERPAPI_KEY)"
        );
    }
}
