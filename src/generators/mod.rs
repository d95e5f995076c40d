pub mod base;
pub mod class;
pub mod generator;
pub mod interface;
pub mod reserved;

use crate::models::GenerationKind;

pub use base::file_writer::RenderedFile;
pub use base::GenerationStrategy;
pub use class::ClassGenerator;
pub use generator::{CodeGenerator, GenerationOutcome, GenerationRequest};
pub use interface::InterfaceGenerator;
pub use reserved::ReservedGenerator;

/// Factory function to create the generator for a kind
/// Returns a boxed trait object for polymorphism
pub fn create_strategy(kind: GenerationKind) -> Box<dyn GenerationStrategy> {
    match kind {
        GenerationKind::Interface => Box::new(InterfaceGenerator::new()),
        GenerationKind::Class => Box::new(ClassGenerator::new()),
        other => Box::new(ReservedGenerator::new(other)),
    }
}
