pub mod declaration_scanner;

use crate::error::{Error, Result};
use crate::models::InterfaceDescriptor;
use std::fs;
use std::path::Path;

use declaration_scanner::DeclarationScanner;

/// Builds an [`InterfaceDescriptor`] from an interface header
#[derive(Debug, Default)]
pub struct InterfaceAnalyzer {
    scanner: DeclarationScanner,
}

impl InterfaceAnalyzer {
    pub fn new() -> Self {
        Self {
            scanner: DeclarationScanner::new(),
        }
    }

    /// Read and parse an interface file.
    ///
    /// Bytes that are not valid UTF-8 (a Latin-1 comment, say) are replaced;
    /// recognition only looks at ASCII text.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<InterfaceDescriptor> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(self.analyze_source(&path.to_string_lossy(), &content))
    }

    /// Parse interface text that has already been loaded
    pub fn analyze_source(&self, path: &str, content: &str) -> InterfaceDescriptor {
        InterfaceDescriptor {
            path: path.to_string(),
            functions: self.scanner.scan(content.lines()),
            includes: self.scanner.scan_includes(content.lines()),
        }
    }
}
