use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format of the console logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    /// Parses `LOG_FORMAT`. Anything other than `json` selects compact output.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Default filter directives used when `RUST_LOG` is unset.
///
/// The binary logs at `level`; sqlx is held at `warn` so statement logging
/// does not drown command output.
pub fn default_directives(level: &str) -> String {
    format!("optimark={level},optimark_db={level},sqlx=warn")
}

/// Initialize console logging on stderr.
///
/// # Configuration
///
/// - **Filter**: `RUST_LOG` when set, otherwise built from `LOG_LEVEL` (default: "warn")
/// - **Format**: `LOG_FORMAT=json` for JSON lines, compact text otherwise
/// - **Target**: Shows module paths (e.g., "optimark::modules::offers")
pub fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let format = LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&log_level)));

    let console_layer = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(true)
            .with_filter(env_filter)
            .boxed(),
    };

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
