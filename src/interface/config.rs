use crate::models::GenerationKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid class type: {0}. Use interface, class, test, mock, spymock, stub or fake")]
    InvalidKind(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateConfig {
    /// Kind of artifact to generate (case-insensitive)
    #[serde(default)]
    pub kind: String,

    /// Name of the new interface, or path to an existing one
    #[serde(default)]
    pub interface_path: String,

    /// Directory the generated files are written to
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Directory holding the template files; discovered when unset
    #[serde(default)]
    pub template_path: Option<String>,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: Option<bool>,

    /// Year written into generated files; the current year when unset
    #[serde(default)]
    pub year: Option<i32>,
}

fn default_output_path() -> String {
    ".".to_string()
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            kind: String::new(),
            interface_path: String::new(),
            output_path: default_output_path(),
            template_path: None,
            verbose: Some(false),
            year: None,
        }
    }
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file.
    ///
    /// The file usually only carries shared settings, so it is not validated
    /// here; validate after merging command-line values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation_kind()?;

        if self.interface_path.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "an interface path is required".to_string(),
            ));
        }

        if self.output_path.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "output path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Parsed generation kind
    pub fn generation_kind(&self) -> Result<GenerationKind, ConfigError> {
        self.kind
            .parse()
            .map_err(|_| ConfigError::InvalidKind(self.kind.clone()))
    }

    /// Merge with another configuration, with other taking precedence
    pub fn merge(&mut self, other: &GenerateConfig) {
        if !other.kind.is_empty() {
            self.kind = other.kind.clone();
        }
        if !other.interface_path.is_empty() {
            self.interface_path = other.interface_path.clone();
        }
        if other.output_path != default_output_path() {
            self.output_path = other.output_path.clone();
        }
        if other.template_path.is_some() {
            self.template_path = other.template_path.clone();
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.year.is_some() {
            self.year = other.year;
        }
    }

    /// Get effective verbose setting
    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}
