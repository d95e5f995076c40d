use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the template directory looked up next to the executable
pub const TEMPLATE_DIR_NAME: &str = "templates";

/// Logical identifiers of the shipped templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Interface,
    ClassHeader,
    ClassCpp,
    Copyright,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Interface,
        TemplateKind::ClassHeader,
        TemplateKind::ClassCpp,
        TemplateKind::Copyright,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TemplateKind::Interface => "INTERFACE",
            TemplateKind::ClassHeader => "CLASS_HEADER",
            TemplateKind::ClassCpp => "CLASS_CPP",
            TemplateKind::Copyright => "COPYRIGHT",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::Interface => "interface.txt",
            TemplateKind::ClassHeader => "class_header.txt",
            TemplateKind::ClassCpp => "class_cpp.txt",
            TemplateKind::Copyright => "copyright.txt",
        }
    }

    fn embedded(&self) -> &'static str {
        match self {
            TemplateKind::Interface => include_str!("../../../templates/interface.txt"),
            TemplateKind::ClassHeader => include_str!("../../../templates/class_header.txt"),
            TemplateKind::ClassCpp => include_str!("../../../templates/class_cpp.txt"),
            TemplateKind::Copyright => include_str!("../../../templates/copyright.txt"),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TemplateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TemplateKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::TemplateNotFound {
                template: s.to_string(),
                path: PathBuf::from(TEMPLATE_DIR_NAME),
            })
    }
}

/// Where template text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Plain-text files under a template root
    Directory(PathBuf),
    /// Copies compiled into the binary
    Embedded,
}

/// Loads template text on demand; nothing is cached
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    source: TemplateSource,
}

impl TemplateLoader {
    pub fn new(source: TemplateSource) -> Self {
        Self { source }
    }

    pub fn from_directory<P: Into<PathBuf>>(root: P) -> Self {
        Self::new(TemplateSource::Directory(root.into()))
    }

    pub fn embedded() -> Self {
        Self::new(TemplateSource::Embedded)
    }

    /// Pick the template root: an explicit directory, then `templates/`
    /// next to the running executable, then the embedded copies
    pub fn discover(explicit: Option<&Path>) -> Self {
        if let Some(root) = explicit {
            return Self::from_directory(root);
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATE_DIR_NAME)))
            .filter(|dir| dir.is_dir())
            .map(Self::from_directory)
            .unwrap_or_else(Self::embedded)
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    pub fn load(&self, kind: TemplateKind) -> Result<String> {
        match &self.source {
            TemplateSource::Embedded => Ok(kind.embedded().to_string()),
            TemplateSource::Directory(root) => {
                let path = root.join(kind.file_name());
                fs::read_to_string(&path).map_err(|_| Error::TemplateNotFound {
                    template: kind.id().to_string(),
                    path,
                })
            }
        }
    }

    /// Load a template by its textual identifier, e.g. `CLASS_HEADER`
    pub fn load_by_id(&self, id: &str) -> Result<String> {
        self.load(id.parse()?)
    }
}
