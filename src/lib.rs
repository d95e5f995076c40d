//! # cpp-classgen
//!
//! Scaffold C++ interfaces and concrete classes from plain-text templates.
//!
//! Templates contain `{{FIELD}}` placeholders that are filled from a small,
//! fixed set of naming fields derived from the file you point the tool at.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write I_Widget.h, a new empty interface
//! classgen interface Widget
//!
//! # Write Widget.cpp and Widget.h implementing an existing interface
//! classgen class include/I_Widget.h
//! ```
//!
//! ### Programmatic Usage
//!
//! ```rust,no_run
//! use cpp_classgen::{generate_from_config, GenerateConfig};
//!
//! let config = GenerateConfig {
//!     kind: "class".to_string(),
//!     interface_path: "include/I_Widget.h".to_string(),
//!     output_path: "./src".to_string(),
//!     ..Default::default()
//! };
//!
//! let outcome = generate_from_config(&config)?;
//! println!("wrote {} files", outcome.written_files.len());
//! # Ok::<(), cpp_classgen::Error>(())
//! ```
//!
//! ## Naming
//!
//! Interfaces carry the `I_` prefix. Generating an `interface` from `Widget`
//! produces `I_Widget`; generating a `class` from `I_Widget.h` produces
//! `Widget`, which implements `I_Widget`.
//!
//! ## Templates
//!
//! Four templates are used: `interface.txt`, `class_header.txt`,
//! `class_cpp.txt` and `copyright.txt`. They are read from `--templates`,
//! else from a `templates/` directory next to the executable, else the
//! copies built into the binary are used.

pub mod analysis;
mod error;
pub mod generators;
pub mod interface;
pub mod models;

pub use error::{Error, Result};
pub use models::*;

// Convenience re-exports for common use cases
pub use generators::base::fields::{FieldKey, FieldRegistry};
pub use generators::base::renderer::render;
pub use generators::base::templates::{TemplateKind, TemplateLoader};
pub use generators::{CodeGenerator, GenerationOutcome, GenerationRequest};
pub use interface::config::GenerateConfig;
pub use interface::generate_from_config;
pub use interface::output::{Logger, ProgressReporter};
