//! Shared utilities for actstat.

pub mod logging;

pub use logging::{try_init_logging, LogFormat, LoggingError};
