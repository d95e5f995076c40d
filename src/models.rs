use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix that marks a file or class as an interface (`I_Widget`).
pub const INTERFACE_PREFIX: &str = "I_";

/// Extension of generated header files.
pub const HEADER_EXTENSION: &str = ".h";

/// Extension of generated implementation files.
pub const CPP_EXTENSION: &str = ".cpp";

/// The category of artifact being generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    Interface,
    Class,
    Test,
    Mock,
    SpyMock,
    Stub,
    Fake,
}

impl GenerationKind {
    pub const ALL: [GenerationKind; 7] = [
        GenerationKind::Interface,
        GenerationKind::Class,
        GenerationKind::Test,
        GenerationKind::Mock,
        GenerationKind::SpyMock,
        GenerationKind::Stub,
        GenerationKind::Fake,
    ];

    /// Naming prefix applied to the generated class name
    pub fn prefix(&self) -> &'static str {
        match self {
            GenerationKind::Interface => INTERFACE_PREFIX,
            GenerationKind::Class => "",
            GenerationKind::Test => "Test",
            GenerationKind::Mock => "Mock",
            GenerationKind::SpyMock => "SpyMock",
            GenerationKind::Stub => "Stub",
            GenerationKind::Fake => "Fake",
        }
    }

    /// Lower-case token accepted on the command line
    pub fn token(&self) -> &'static str {
        match self {
            GenerationKind::Interface => "interface",
            GenerationKind::Class => "class",
            GenerationKind::Test => "test",
            GenerationKind::Mock => "mock",
            GenerationKind::SpyMock => "spymock",
            GenerationKind::Stub => "stub",
            GenerationKind::Fake => "fake",
        }
    }

    /// Value stored in the `TEMPLATE_TYPE` field
    pub fn template_type(&self) -> String {
        self.token().to_uppercase()
    }
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = GenerationKind::ALL.iter().map(|k| k.token()).collect();
        write!(
            f,
            "unknown class type '{}' (expected one of: {})",
            self.0,
            tokens.join(", ")
        )
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for GenerationKind {
    type Err = UnknownKind;

    /// Case-insensitive parse of a kind token
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        GenerationKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.token() == lowered)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Naming attributes derived once per generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingProfile {
    pub class_name: String,
    pub interface_name: String,
    /// Name of the primary header emitted for `class_name`
    pub file_name: String,
    pub year: i32,
    #[serde(default)]
    pub copyright_text: String,
}

/// One argument of a declared function.
///
/// Argument decomposition into type, name and originating include is not
/// available yet, so every argument is carried as its raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FunctionArgument {
    Unparsed(String),
}

/// A line recognized as a pure-virtual function declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    /// Declaration text exactly as it appeared in the source, line terminator excluded
    pub raw: String,
    pub arguments: Vec<FunctionArgument>,
}

impl FunctionDeclaration {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            arguments: Vec::new(),
        }
    }
}

/// Parsed summary of one interface source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDescriptor {
    pub path: String,
    pub functions: Vec<FunctionDeclaration>,
    pub includes: Vec<String>,
}

impl InterfaceDescriptor {
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}
