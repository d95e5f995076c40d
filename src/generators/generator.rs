use crate::analysis::InterfaceAnalyzer;
use crate::error::Result;
use crate::generators::base::fields::FieldRegistry;
use crate::generators::base::file_writer::FileWriter;
use crate::generators::base::templates::TemplateLoader;
use crate::generators::base::{initialize_fields, GenerationContext, GenerationPlan};
use crate::generators::create_strategy;
use crate::models::{GenerationKind, InterfaceDescriptor, NamingProfile};
use chrono::Datelike;
use std::path::PathBuf;

/// One generation task: what to build, from which path, and where to put it
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub kind: GenerationKind,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub year: i32,
}

impl GenerationRequest {
    /// Request stamped with the current calendar year, writing to the working directory
    pub fn new(kind: GenerationKind, input_path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            input_path: input_path.into(),
            output_path: PathBuf::from("."),
            year: chrono::Local::now().year(),
        }
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

/// What a completed generation produced
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub naming: NamingProfile,
    pub interface: Option<InterfaceDescriptor>,
    pub written_files: Vec<PathBuf>,
}

/// Runs a generation request: names, renders, then writes.
///
/// Each call builds its own field registry, so one generator can serve any
/// number of requests.
pub struct CodeGenerator {
    templates: TemplateLoader,
    analyzer: InterfaceAnalyzer,
}

impl CodeGenerator {
    pub fn new(templates: TemplateLoader) -> Self {
        Self {
            templates,
            analyzer: InterfaceAnalyzer::new(),
        }
    }

    /// Derive names and fill the registry for a request
    pub fn initialize(
        &self,
        request: &GenerationRequest,
    ) -> Result<(NamingProfile, FieldRegistry)> {
        initialize_fields(
            request.kind,
            &request.input_path.to_string_lossy(),
            request.year,
            &self.templates,
        )
    }

    /// Render every output file without touching the output directory
    pub fn plan(
        &self,
        request: &GenerationRequest,
        naming: &NamingProfile,
        fields: &FieldRegistry,
    ) -> Result<GenerationPlan> {
        let strategy = create_strategy(request.kind);
        let context = GenerationContext {
            kind: request.kind,
            input_path: &request.input_path,
            naming,
            fields,
            templates: &self.templates,
            analyzer: &self.analyzer,
        };
        strategy.plan(&context)
    }

    /// Write a rendered plan into the request's output directory
    pub fn write(
        &self,
        request: &GenerationRequest,
        plan: &GenerationPlan,
    ) -> Result<Vec<PathBuf>> {
        let mut writer = FileWriter::new(&request.output_path)?;
        writer.write_all(&plan.files)?;

        Ok(writer
            .get_generated_files()
            .iter()
            .map(|name| writer.get_output_path().join(name))
            .collect())
    }

    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutcome> {
        let (naming, fields) = self.initialize(request)?;
        let plan = self.plan(request, &naming, &fields)?;
        let written_files = self.write(request, &plan)?;

        Ok(GenerationOutcome {
            naming,
            interface: plan.interface,
            written_files,
        })
    }
}
