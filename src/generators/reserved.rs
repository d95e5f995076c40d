use crate::error::{Error, Result};
use crate::generators::base::{GenerationContext, GenerationPlan, GenerationStrategy};
use crate::models::GenerationKind;

/// Placeholder for kinds that have a name and prefix but no generator yet
/// (tests, mocks, spy mocks, stubs and fakes)
pub struct ReservedGenerator {
    kind: GenerationKind,
}

impl ReservedGenerator {
    pub fn new(kind: GenerationKind) -> Self {
        Self { kind }
    }
}

impl GenerationStrategy for ReservedGenerator {
    fn kind(&self) -> GenerationKind {
        self.kind
    }

    fn plan(&self, _context: &GenerationContext<'_>) -> Result<GenerationPlan> {
        Err(Error::NotImplemented(self.kind))
    }
}
