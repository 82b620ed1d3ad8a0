use assistant_settings::config::settings::get_config;
use assistant_settings::startup::ensure_configured;
use assistant_settings::telemetry::{get_subscriber, init_subscriber};

fn main() {
    let subscriber = get_subscriber("assistant-settings".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = match get_config() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to read the config: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = ensure_configured(&settings) {
        tracing::error!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("✅ Assistant is configured");
}
