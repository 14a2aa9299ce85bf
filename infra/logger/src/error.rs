use thiserror::Error;

/// Failures while setting up the global tracing subscriber.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// A global subscriber has already been installed.
    #[error("Logger already initialized: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// The rolling file appender rejected its configuration.
    #[error("Log file appender error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// The log directory could not be created.
    #[error("Log directory error: {0}")]
    Io(#[from] std::io::Error),

    /// Builder settings that cannot produce a working logger.
    #[error("Invalid logger configuration: {0}")]
    InvalidConfiguration(String),
}
