use lambda_http::tracing;

use crate::config::Config;

/// Installs the global subscriber. CloudWatch stamps every line itself, so
/// timestamps and ANSI colours are left out.
pub fn init(config: &Config) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_ansi(false)
        .without_time()
        .with_target(true);

    if config.log_json {
        builder.json().with_current_span(false).init();
    } else {
        builder.init();
    }

    tracing::debug!(level = %config.log_level, json = config.log_json, "logging initialized");
}
