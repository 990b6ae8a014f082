use clap::ValueEnum;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::settings::{LogFormat, LoggingConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl LogLevel {
    /// Filter directive understood by `EnvFilter`.
    pub fn as_str(&self) -> &'static str {
        match *self {
            LogLevel::TRACE => "trace",
            LogLevel::DEBUG => "debug",
            LogLevel::INFO => "info",
            LogLevel::WARN => "warn",
            LogLevel::ERROR => "error",
        }
    }
}

/// Build the logging config from command line values; level defaults to `info`.
pub fn run(arg_log_level: Option<LogLevel>, format: LogFormat) {
    let logging_config = arg_log_level
        .map(|level| LoggingConfig::new(level.as_str().to_owned(), format))
        .unwrap_or_else(|| LoggingConfig {
            format,
            ..LoggingConfig::default()
        });

    init_logging(&logging_config);
}

/// Initialize tracing with the desired config.
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_new(&cfg.level).unwrap_or_else(|_| EnvFilter::new("debug"));

    // Base layer: filter + writer
    let registry = tracing_subscriber::registry().with(env_filter);

    // Choose format layer
    match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .flatten_event(true) // flattens fields for CRI log parsers
                .with_ansi(false);

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(true);

            let _ = registry.with(layer).try_init();
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_valid_filter_directives() {
        let levels = [
            (LogLevel::TRACE, "trace"),
            (LogLevel::DEBUG, "debug"),
            (LogLevel::INFO, "info"),
            (LogLevel::WARN, "warn"),
            (LogLevel::ERROR, "error"),
        ];
        for (level, expected) in levels {
            assert_eq!(level.as_str(), expected);
            assert!(EnvFilter::try_new(level.as_str()).is_ok());
        }
    }
}
