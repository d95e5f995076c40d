use crate::interface::config::{ConfigError, GenerateConfig};
use clap::Parser;
use std::path::PathBuf;

const KIND_TABLE: &str = "\
CLASS_TYPE:
  interface   Writes a new interface I_<NAME>.h, where INTERFACE_PATH names the interface
  class       Generates <NAME>.cpp and <NAME>.h implementing the existing interface I_<NAME>.h
  test        Not implemented yet
  mock        Not implemented yet
  spymock     Not implemented yet
  stub        Not implemented yet
  fake        Not implemented yet";

/// C++ code generator: creates an interface, or a class of the given type
/// from an existing interface
#[derive(Parser, Debug)]
#[command(name = "classgen", version, after_help = KIND_TABLE)]
pub struct ClassgenCli {
    /// Kind of file to generate (case-insensitive)
    #[arg(value_name = "CLASS_TYPE")]
    pub class_type: String,

    /// Name of the new interface, or path to an existing interface header
    #[arg(value_name = "INTERFACE_PATH")]
    pub interface_path: PathBuf,

    /// Directory for generated files (default: current directory)
    #[arg(short = 'o', long = "output-path")]
    pub output_path: Option<PathBuf>,

    /// Directory containing the template files
    #[arg(short = 't', long = "templates")]
    pub template_path: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config")]
    pub config_file: Option<PathBuf>,

    /// Verbose output
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

impl ClassgenCli {
    /// Effective configuration: the `--config` file, if any, overridden by
    /// every option given on the command line
    pub fn resolve_config(&self) -> Result<GenerateConfig, ConfigError> {
        let cli_config = GenerateConfig::from(self);
        let Some(path) = &self.config_file else {
            return Ok(cli_config);
        };

        let mut config = GenerateConfig::from_file(path)?;
        config.merge(&cli_config);
        // `merge` cannot tell an explicit `-o .` from the default
        if self.output_path.is_some() {
            config.output_path = cli_config.output_path;
        }
        Ok(config)
    }
}

impl From<&ClassgenCli> for GenerateConfig {
    fn from(cli: &ClassgenCli) -> Self {
        let defaults = GenerateConfig::default();
        GenerateConfig {
            kind: cli.class_type.clone(),
            interface_path: cli.interface_path.to_string_lossy().to_string(),
            output_path: cli
                .output_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or(defaults.output_path),
            template_path: cli
                .template_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            // Leave unset so a config file can turn it on
            verbose: cli.verbose.then_some(true),
            year: None,
        }
    }
}
