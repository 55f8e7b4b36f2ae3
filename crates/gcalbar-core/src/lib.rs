pub mod config;
pub mod error;

pub use config::{Config, ConfigValidationError, ValidationResult};
pub use error::AppError;

use anyhow::Result;

/// Initialize logging for the widget binary.
///
/// Conky reads stdout, so tracing output goes to stderr.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("gcalbar core initialized");
    Ok(())
}
