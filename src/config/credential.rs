use std::fmt;

/// The two API keys the assistant needs before it can talk to anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    DeepInfra,
    SerpApi,
}

impl Credential {
    /// Environment variable that overrides this credential at startup.
    pub fn env_var(&self) -> &'static str {
        match self {
            Credential::DeepInfra => "ASSISTANT__DEEPINFRA_API_KEY",
            Credential::SerpApi => "ASSISTANT__SERPAPI_KEY",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Credential::DeepInfra => "DeepInfra API key",
            Credential::SerpApi => "SerpAPI key",
        }
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
