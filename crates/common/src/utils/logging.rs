use std::io;
use tracing::Subscriber;
use tracing_subscriber::{fmt, fmt::MakeWriter, util::SubscriberInitExt, EnvFilter};

/// Filter applied when neither `RUST_LOG` nor the config provides one.
pub const DEFAULT_FILTER: &str = "warn";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(fallback).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    })
}

/// Compact subscriber writing to `writer`, with the same filter rules as
/// [`init_logging_default`]. Exposed so callers can scope it with
/// `tracing::subscriber::with_default`.
pub fn compact_subscriber<W>(fallback: &str, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(false)
        .compact()
        .with_writer(writer)
        .finish()
}

/// JSON counterpart of [`compact_subscriber`].
pub fn json_subscriber<W>(fallback: &str, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(false)
        .json()
        .with_writer(writer)
        .finish()
}

/// Initialize tracing subscriber with compact output on stdout.
/// - Respects `RUST_LOG` if set
/// - Falls back to `fallback` (an `EnvFilter` directive string)
/// - Writes to stdout, the same stream reports and console messages use
pub fn init_logging_default(fallback: &str) {
    let _ = compact_subscriber(fallback, io::stdout).try_init();
}

/// Initialize tracing subscriber with JSON structured output.
/// - Respects `RUST_LOG` if set, otherwise uses `fallback`
/// - Writes to stdout
pub fn init_logging_json(fallback: &str) {
    let _ = json_subscriber(fallback, io::stdout).try_init();
}

/// Pick the subscriber format in one place so binaries don't repeat the branch.
pub fn init_logging(json: bool, fallback: &str) {
    if json {
        init_logging_json(fallback);
    } else {
        init_logging_default(fallback);
    }
}
