//! Tracing setup for the service.
//!
//! - LOG_LEVEL: `EnvFilter` directives, e.g. "debug" or
//!   "info,classifier=debug,generator=debug".
//! - LOG_FORMAT: "pretty" (default), "compact" or "json".
//!
//! Request spans come from tower-http's TraceLayer; core logs use the
//! `eduassist`, `classifier` and `generator` targets.

use tracing::warn;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "info,eduassist=debug,classifier=info,generator=info,tower_http=info,axum=info";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    /// Unknown values fall back to `Pretty`; the second field reports that.
    pub fn parse(value: Option<&str>) -> (Self, bool) {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("pretty") => (LogFormat::Pretty, true),
            Some("compact") => (LogFormat::Compact, true),
            Some("json") => (LogFormat::Json, true),
            Some(_) => (LogFormat::Pretty, false),
        }
    }
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

pub fn init_tracing() {
    let raw_format = std::env::var("LOG_FORMAT").ok();
    let (format, recognized) = LogFormat::parse(raw_format.as_deref());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if let Err(e) = installed {
        eprintln!("tracing subscriber already installed: {e}");
        return;
    }
    if !recognized {
        warn!(target: "eduassist", value = ?raw_format, "Unknown LOG_FORMAT; using pretty");
    }
}
