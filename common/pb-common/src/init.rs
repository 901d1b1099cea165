//! Tracing initialization
//!
//! Logs go to stderr so stdout stays clean for rendered pages and JSON.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging for a portal tool
///
/// Sets up logging to stderr with:
/// - Formatted output without ANSI colors (for clean logs)
/// - Environment-based filtering via RUST_LOG
/// - A default level for `crate_name` chosen by the `-v` count
///   (0 = info, 1 = debug, 2+ = trace)
///
/// Set `LOG_FORMAT=json` for structured JSON output.
///
/// # Example
///
/// ```rust,ignore
/// pb_common::init_tracing("pb_search", 0)?;
/// ```
pub fn init_tracing(crate_name: &str, verbose: u8) -> anyhow::Result<()> {
    let level = Verbosity::from_count(verbose);
    let directive = format!("{}={}", crate_name, level.as_str());
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Default log level selected by the number of `-v` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Info,
            1 => Self::Debug,
            _ => Self::Trace,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
