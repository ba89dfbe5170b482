use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn parse_level(log_level: &str) -> Level {
    match log_level.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "INFO" => Level::INFO,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to INFO", log_level);
            Level::INFO
        }
    }
}

/// Initialize structured logging with plain or JSON output based on settings
pub fn init_logging(log_level: &str, log_format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let level = parse_level(log_level);

    // Build filter string from the configured level so it takes precedence
    // over any RUST_LOG already in the environment
    let filter_string = format!("blog_client={},reqwest=warn", level);
    let env_filter = tracing_subscriber::EnvFilter::new(filter_string);

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match log_format.to_lowercase().as_str() {
        "json" => {
            let json_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true);

            subscriber.with(json_layer).try_init()?;
        }
        _ => {
            let plain_layer = tracing_subscriber::fmt::layer().with_target(true);

            subscriber.with(plain_layer).try_init()?;
        }
    }

    tracing::info!(
        log_level = %log_level,
        log_format = %log_format,
        "logging initialized"
    );

    Ok(())
}
