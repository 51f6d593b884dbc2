//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

use crate::model::ModelError;

/// Result alias for generation operations
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Generator error type
///
/// Only structural failures surface here. Content anomalies such as unknown
/// type names or attribute-less classes degrade or skip and are reported
/// through the build log instead.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A directory could not be created or a file could not be written
    #[error("Filesystem error at {path}: {source}")]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A template failed to register
    #[error("Template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// A template failed to render
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed
    #[error("Observability error: {0}")]
    Observability(String),

    /// The source model could not be loaded
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl GenerateError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<figment::Error> for GenerateError {
    fn from(error: figment::Error) -> Self {
        Self::Config(error.to_string())
    }
}

impl From<toml::ser::Error> for GenerateError {
    fn from(error: toml::ser::Error) -> Self {
        Self::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let error = GenerateError::io(
            "/tmp/out/pom.xml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = error.to_string();
        assert!(message.contains("/tmp/out/pom.xml"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_config_error_message() {
        let error = GenerateError::Config("missing key".to_string());
        assert_eq!(error.to_string(), "Configuration error: missing key");
    }
}
