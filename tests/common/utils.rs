use once_cell::sync::Lazy;

use assistant_settings::config::settings::{assistant_environment, build_settings, Settings};
use assistant_settings::telemetry::{get_subscriber, init_subscriber};

// Tests log to a sink unless TEST_LOG is set. The global subscriber can only be installed once.
static TRACING: Lazy<()> = Lazy::new(|| {
    let name = "assistant-settings-test".to_string();
    let level = "debug".to_string();

    match std::env::var("TEST_LOG") {
        Ok(_) => init_subscriber(get_subscriber(name, level, std::io::stdout)),
        Err(_) => init_subscriber(get_subscriber(name, level, std::io::sink)),
    }
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Build settings through the same environment source `get_config` uses,
/// fed from a fixed set of variables instead of the process environment.
pub fn settings_from_env(vars: &[(&str, &str)]) -> Settings {
    init_tracing();

    let mut source = config::Map::new();
    for (key, value) in vars {
        source.insert(key.to_string(), value.to_string());
    }

    build_settings(assistant_environment().source(Some(source)))
        .expect("Failed to build settings.")
}
