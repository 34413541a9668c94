use tracing_subscriber::{
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LogFormat, LogTarget, LoggingConfig};

/// Install the global subscriber; `RUST_LOG` overrides the configured filter
pub fn init_logging(config: &LoggingConfig) {
    let directives = filter_directives(config);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives));

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(make_writer(config.target))
                        .with_span_events(FmtSpan::CLOSE),
                )
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .pretty()
                        .with_writer(make_writer(config.target))
                        .with_target(true)
                        .with_span_events(FmtSpan::CLOSE),
                )
                .init();
        }
    }

    tracing::debug!(filter = %directives, target = ?config.target, "Logging initialized");
}

/// Base level followed by the per-target directives, comma separated
pub fn filter_directives(config: &LoggingConfig) -> String {
    std::iter::once(config.level.trim())
        .chain(config.directives.iter().map(|d| d.trim()))
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

fn make_writer(target: LogTarget) -> BoxMakeWriter {
    match target {
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogTarget::Stdout => BoxMakeWriter::new(std::io::stdout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_quiet_sqlx() {
        assert_eq!(filter_directives(&LoggingConfig::default()), "info,sqlx=warn");
    }

    #[test]
    fn test_directives_skip_blank_entries() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            directives: vec![" ".to_string(), "postboard=trace".to_string()],
            ..Default::default()
        };

        assert_eq!(filter_directives(&config), "debug,postboard=trace");
    }

    #[test]
    fn test_directives_without_extras() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            directives: Vec::new(),
            ..Default::default()
        };

        assert_eq!(filter_directives(&config), "warn");
    }
}
