use crate::error::Result;
use crate::generators::base::templates::TemplateKind;
use crate::generators::base::{render_file, GenerationContext, GenerationPlan, GenerationStrategy};
use crate::models::{GenerationKind, CPP_EXTENSION, HEADER_EXTENSION};

/// Generator for a concrete class implementing an existing interface.
///
/// Emits the implementation file first, then the header.
pub struct ClassGenerator;

impl ClassGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationStrategy for ClassGenerator {
    fn kind(&self) -> GenerationKind {
        GenerationKind::Class
    }

    fn plan(&self, context: &GenerationContext<'_>) -> Result<GenerationPlan> {
        let interface = context.analyzer.analyze_file(context.input_path)?;
        let class_name = &context.naming.class_name;

        let cpp = render_file(
            context.templates,
            TemplateKind::ClassCpp,
            context.fields,
            format!("{}{}", class_name, CPP_EXTENSION),
        )?;
        let header = render_file(
            context.templates,
            TemplateKind::ClassHeader,
            context.fields,
            format!("{}{}", class_name, HEADER_EXTENSION),
        )?;

        Ok(GenerationPlan {
            files: vec![cpp, header],
            interface: Some(interface),
        })
    }
}
