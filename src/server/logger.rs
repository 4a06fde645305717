use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Output format of the process logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    /// `json` in any case selects JSON; anything else, or nothing, selects compact text.
    pub fn from_value(raw: Option<&str>) -> Self {
        match raw {
            Some(format) if format.trim().eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Compact,
        }
    }

    /// Format requested through `LOG_FORMAT`.
    ///
    /// Read on its own, ahead of [`Config`](crate::server::config::Config), so that
    /// configuration errors are already logged in the requested format.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var("LOG_FORMAT").ok().as_deref())
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default `info` filter. Must be called once, before the
/// first log line; configuration errors are reported through this subscriber.
pub fn init(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().with_target(false).json())
            .init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init(),
    }
}
