use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Placeholder names understood by the templates, in registry order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    TemplateType,
    Copyright,
    Year,
    ClassName,
    FileName,
    InterfaceName,
    FunctionDeclarations,
    FunctionDefinitions,
    SignalDeclarations,
    SignalDefinitions,
}

impl FieldKey {
    pub const ALL: [FieldKey; 10] = [
        FieldKey::TemplateType,
        FieldKey::Copyright,
        FieldKey::Year,
        FieldKey::ClassName,
        FieldKey::FileName,
        FieldKey::InterfaceName,
        FieldKey::FunctionDeclarations,
        FieldKey::FunctionDefinitions,
        FieldKey::SignalDeclarations,
        FieldKey::SignalDefinitions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::TemplateType => "TEMPLATE_TYPE",
            FieldKey::Copyright => "COPYRIGHT",
            FieldKey::Year => "YEAR",
            FieldKey::ClassName => "CLASS_NAME",
            FieldKey::FileName => "FILE_NAME",
            FieldKey::InterfaceName => "INTERFACE_NAME",
            FieldKey::FunctionDeclarations => "FUNCTION_DECLARATIONS",
            FieldKey::FunctionDefinitions => "FUNCTION_DEFINITIONS",
            FieldKey::SignalDeclarations => "SIGNAL_DECLARATIONS",
            FieldKey::SignalDefinitions => "SIGNAL_DEFINITIONS",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or(())
    }
}

/// Values substituted into templates for one generation run.
///
/// Every key always exists; unset keys hold the empty string. Iteration
/// follows [`FieldKey::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRegistry {
    values: [String; 10],
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FieldKey) -> &str {
        &self.values[key.index()]
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        self.values[key.index()] = value.into();
    }

    /// Look up a value by its placeholder name
    pub fn lookup(&self, name: &str) -> Option<&str> {
        name.parse::<FieldKey>().ok().map(|key| self.get(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        FieldKey::ALL
            .iter()
            .map(move |key| (*key, self.values[key.index()].as_str()))
    }
}

impl Serialize for FieldRegistry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(FieldKey::ALL.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}
