use crate::error::Result;
use crate::generators::base::templates::TemplateKind;
use crate::generators::base::{render_file, GenerationContext, GenerationPlan, GenerationStrategy};
use crate::models::{GenerationKind, HEADER_EXTENSION};

/// Generator for a new, empty interface header
pub struct InterfaceGenerator;

impl InterfaceGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InterfaceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationStrategy for InterfaceGenerator {
    fn kind(&self) -> GenerationKind {
        GenerationKind::Interface
    }

    fn plan(&self, context: &GenerationContext<'_>) -> Result<GenerationPlan> {
        let header = render_file(
            context.templates,
            TemplateKind::Interface,
            context.fields,
            format!("{}{}", context.naming.class_name, HEADER_EXTENSION),
        )?;

        Ok(GenerationPlan {
            files: vec![header],
            interface: None,
        })
    }
}
