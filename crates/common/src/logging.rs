//! Provides utilities to initialize logging.
use std::env;

use tracing::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable name for the service label, which is appended to the
/// whoami string.
pub const SVC_LABEL_ENVVAR: &str = "AKRO_BRIDGE_SVC_LABEL";

/// Environment variable that switches stdout logging to JSON lines.
pub const LOG_JSON_ENVVAR: &str = "LOG_JSON";

/// Default filter directive used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Configuration for the logger.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// The whoami string, which is used to identify the service in logs.
    whoami: String,

    /// The filter directive used when `RUST_LOG` is not set.
    default_filter: String,
}

impl LoggerConfig {
    /// Creates a new empty instance with whoami set.
    pub fn new(whoami: String) -> Self {
        Self {
            whoami,
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }

    /// Creates a new instance with the whoami string set to the provided
    /// string.
    pub fn with_base_name(s: &str) -> Self {
        Self::new(get_whoami_string(s))
    }

    /// Sets the filter directive used when `RUST_LOG` is not set.
    pub fn set_default_filter(&mut self, directive: impl Into<String>) {
        self.default_filter = directive.into();
    }

    /// The whoami string.
    pub fn whoami(&self) -> &str {
        &self.whoami
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::with_base_name("(akro-bridge)")
    }
}

/// Initializes the logging subsystem with the provided config.
pub fn init(config: LoggerConfig) {
    let filt = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let log_file = env::var("LOG_FILE").is_ok_and(|v| v == "1");
    let log_line_num = env::var("LOG_LINE_NUM").is_ok_and(|v| v == "1");
    let log_json = env::var(LOG_JSON_ENVVAR).is_ok_and(|v| v == "1");

    // Stdout logging.
    let stdout_sub = if log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_file(log_file)
            .with_line_number(log_line_num)
            .with_filter(filt)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_file(log_file)
            .with_line_number(log_line_num)
            .with_filter(filt)
            .boxed()
    };

    tracing_subscriber::registry().with(stdout_sub).init();

    info!(whoami = %config.whoami(), "logging started");
}

/// Gets the service label from the standard envvar, which should be included
/// in the whoami string.
pub fn get_service_label_from_env() -> Option<String> {
    env::var(SVC_LABEL_ENVVAR).ok()
}

/// Computes a standard whoami string.
pub fn get_whoami_string(base: &str) -> String {
    match get_service_label_from_env() {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}
