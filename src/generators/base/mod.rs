pub mod fields;
pub mod file_writer;
pub mod naming;
pub mod renderer;
pub mod templates;

use crate::analysis::InterfaceAnalyzer;
use crate::error::Result;
use crate::models::{GenerationKind, InterfaceDescriptor, NamingProfile};
use std::path::Path;

use fields::{FieldKey, FieldRegistry};
use file_writer::RenderedFile;
use templates::{TemplateKind, TemplateLoader};

/// Everything a strategy needs to produce its files
pub struct GenerationContext<'a> {
    pub kind: GenerationKind,
    pub input_path: &'a Path,
    pub naming: &'a NamingProfile,
    pub fields: &'a FieldRegistry,
    pub templates: &'a TemplateLoader,
    pub analyzer: &'a InterfaceAnalyzer,
}

/// Output of a strategy: rendered files plus the interface it read, if any
#[derive(Debug, Default)]
pub struct GenerationPlan {
    pub files: Vec<RenderedFile>,
    pub interface: Option<InterfaceDescriptor>,
}

/// Common trait for all per-kind generators.
///
/// Strategies only render; nothing touches the output directory until the
/// whole plan exists.
pub trait GenerationStrategy {
    fn kind(&self) -> GenerationKind;

    fn plan(&self, context: &GenerationContext<'_>) -> Result<GenerationPlan>;
}

/// Derive naming for one run and populate a fresh registry from it.
///
/// `COPYRIGHT` holds the copyright rendered for the first file of the run;
/// [`render_file`] re-renders it for each file it produces.
pub fn initialize_fields(
    kind: GenerationKind,
    input_path: &str,
    year: i32,
    templates: &TemplateLoader,
) -> Result<(NamingProfile, FieldRegistry)> {
    let mut naming = naming::derive_naming(kind, input_path, year)?;

    let mut fields = FieldRegistry::new();
    fields.set(FieldKey::TemplateType, kind.template_type());
    fields.set(FieldKey::Year, naming.year.to_string());
    fields.set(FieldKey::ClassName, naming.class_name.as_str());
    fields.set(FieldKey::InterfaceName, naming.interface_name.as_str());
    fields.set(FieldKey::FileName, naming.file_name.as_str());

    let copyright = renderer::render(&templates.load(TemplateKind::Copyright)?, &fields);
    fields.set(FieldKey::Copyright, copyright.as_str());
    naming.copyright_text = copyright;

    Ok((naming, fields))
}

/// Load and render one template for the named output file.
///
/// `FILE_NAME` is set first, so both the copyright block and the body see
/// the name of the file being produced.
pub fn render_file(
    templates: &TemplateLoader,
    template: TemplateKind,
    fields: &FieldRegistry,
    file_name: String,
) -> Result<RenderedFile> {
    let copyright = templates.load(TemplateKind::Copyright)?;
    let text = templates.load(template)?;

    let mut file_fields = fields.clone();
    file_fields.set(FieldKey::FileName, file_name.as_str());
    let copyright = renderer::render(&copyright, &file_fields);
    file_fields.set(FieldKey::Copyright, copyright);

    Ok(RenderedFile::new(file_name, renderer::render(&text, &file_fields)))
}
