/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Invalid or missing configuration values
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The database could not be reached or rejected the credentials
    #[error("Connection error: cannot connect to {host}:{port}")]
    Connection {
        host: String,
        port: u16,
        #[source]
        source: sqlx::Error,
    },

    /// Query execution errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Output directory or report file errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn connection(host: impl Into<String>, port: u16, source: sqlx::Error) -> Self {
        AppError::Connection {
            host: host.into(),
            port,
            source,
        }
    }
}
