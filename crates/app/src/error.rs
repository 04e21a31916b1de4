//! Error types for the colldir binary

use colldir_application::ConversionError;
use colldir_infrastructure::PostmanError;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Export or import failed
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// The Postman file could not be read or written
    #[error(transparent)]
    Postman(#[from] PostmanError),

    /// Writing to standard output failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The log subscriber could not be installed
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
