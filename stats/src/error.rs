use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(#[from] actstat_utils::LoggingError),
}
