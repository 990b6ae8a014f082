use std::ffi::OsString;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use hello::config::settings::{LogFormat, ServerConfig};
use hello::observability::metrics::Metrics;
use hello::server;
use hello::utils::constants::DEFAULT_BIND;
use hello::utils::logging;
use hello::utils::logging::LogLevel;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The socket to bind to.
    #[arg(long, default_value = DEFAULT_BIND)]
    bind: String,
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,
}

/// Accept Go-style single dash long flags (`-bind :8080`) next to `--bind`.
fn normalize_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| match arg.to_str() {
            Some(s) if i > 0 && s.len() > 2 && s.starts_with('-') && !s.starts_with("--") => {
                OsString::from(format!("-{}", s))
            }
            _ => arg,
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Report working directory
    // -------------------------------

    let dir = std::env::current_dir().context("cannot determine working directory")?;
    println!("{}", dir.display());

    // -------------------------------
    // 2. Parse flags, set up logging
    // -------------------------------

    let args = Args::parse_from(normalize_flags(std::env::args_os()));
    logging::run(args.log_level, args.log_format);

    // -------------------------------
    // 3. Register metrics
    // -------------------------------

    let metrics = Arc::new(Metrics::new()?);

    // -------------------------------
    // 4. Bind and serve until killed
    // -------------------------------

    let server_config = ServerConfig::new(args.bind);
    info!(bind = %server_config.bind, "Service starting...");
    server::server::start(&server_config, metrics)
        .await
        .inspect_err(|e| error!("{:#}", e))
}
