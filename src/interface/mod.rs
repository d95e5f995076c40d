pub mod cli;
pub mod config;
pub mod output;

use crate::error::{Error, Result};
use crate::generators::base::templates::{TemplateLoader, TemplateSource};
use crate::generators::{CodeGenerator, GenerationOutcome, GenerationRequest};
use std::path::Path;

pub use cli::*;
pub use config::*;
pub use output::*;

/// Run one generation described by a configuration
pub fn generate_from_config(config: &config::GenerateConfig) -> Result<GenerationOutcome> {
    let logger = output::Logger::new(config.is_verbose(), false);

    let kind = config
        .generation_kind()
        .map_err(|e| Error::Usage(e.to_string()))?;
    config.validate()?;

    let mut request = GenerationRequest::new(kind, &config.interface_path)
        .with_output_path(&config.output_path);
    if let Some(year) = config.year {
        request = request.with_year(year);
    }

    let templates = TemplateLoader::discover(config.template_path.as_deref().map(Path::new));
    match templates.source() {
        TemplateSource::Directory(root) => {
            logger.debug(&format!("Using templates from {}", root.display()))
        }
        TemplateSource::Embedded => logger.debug("Using built-in templates"),
    }

    let generator = CodeGenerator::new(templates);
    let mut reporter = output::ProgressReporter::new(logger.clone(), 3);

    reporter.start_step("Deriving names");
    let (naming, fields) = generator
        .initialize(&request)
        .inspect_err(|_| reporter.fail_step())?;
    reporter.complete_step(Some(naming.class_name.as_str()));
    logger.verbose(&format!("  CLASS_NAME = {}", naming.class_name));
    logger.verbose(&format!("  INTERFACE_NAME = {}", naming.interface_name));
    logger.verbose(&format!("  YEAR = {}", naming.year));

    reporter.start_step(&format!("Rendering {} templates", kind));
    let plan = generator
        .plan(&request, &naming, &fields)
        .inspect_err(|_| reporter.fail_step())?;
    if let Some(interface) = &plan.interface {
        if interface.function_count() == 0 {
            logger.warning(&format!(
                "No pure-virtual function declarations found in {}",
                interface.path
            ));
        }
        reporter.update_progress(&format!(
            "📋 Found {} virtual function declarations in {}:",
            interface.function_count(),
            interface.path
        ));
        for function in &interface.functions {
            reporter.update_progress(&format!("  - {}", function.raw.trim()));
        }
        for include in &interface.includes {
            reporter.update_progress(&format!("  • {}", include));
        }
    }
    reporter.complete_step(Some(format!("{} files", plan.files.len()).as_str()));

    reporter.start_step("Writing files");
    let written_files = generator
        .write(&request, &plan)
        .inspect_err(|_| reporter.fail_step())?;
    for file in &written_files {
        reporter.update_progress(&format!("  📄 {}", file.display()));
    }
    reporter.complete_step(None);
    reporter.finish();

    Ok(GenerationOutcome {
        naming,
        interface: plan.interface,
        written_files,
    })
}
