//! Observability module for logging setup.

mod logging;

pub use logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
