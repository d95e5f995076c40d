use crate::interface::config::ConfigError;
use crate::models::GenerationKind;
use serde::{ser::Serializer, Serialize};
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid arguments: {0}")]
    Usage(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Template '{template}' not found at {}", .path.display())]
    TemplateNotFound { template: String, path: PathBuf },

    #[error("Failed to read interface {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Generation of '{0}' is not implemented yet")]
    NotImplemented(GenerationKind),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Whether the failure came from how the tool was invoked
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::Usage(_) | Error::Config(ConfigError::InvalidKind(_))
        )
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
