use crate::models::FunctionDeclaration;

/// Line-based scanner for pure-virtual function declarations.
///
/// A line qualifies when it contains `virtual` and the text after its last
/// `()` contains `0;`. This is purely lexical: multi-line declarations,
/// default arguments that call functions, and commented-out code are not
/// understood.
#[derive(Debug, Default)]
pub struct DeclarationScanner;

impl DeclarationScanner {
    pub fn new() -> Self {
        Self
    }

    /// Extract declarations from the given lines, keeping source order and duplicates
    pub fn scan<'a, I>(&self, lines: I) -> Vec<FunctionDeclaration>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .filter(|line| self.is_virtual_function_declaration(line))
            .map(FunctionDeclaration::new)
            .collect()
    }

    /// Check whether a single line is a pure-virtual declaration
    pub fn is_virtual_function_declaration(&self, line: &str) -> bool {
        // rsplit always yields at least one piece, the whole line when "()" is absent
        let after_last_parens = line.rsplit("()").next().unwrap_or(line);
        line.contains("virtual") && after_last_parens.contains("0;")
    }

    /// Check whether a line is a preprocessor include
    pub fn is_include(&self, line: &str) -> bool {
        line.trim_start()
            .strip_prefix('#')
            .map(|rest| rest.trim_start().starts_with("include"))
            .unwrap_or(false)
    }

    /// Extract include lines in source order, trimmed of surrounding whitespace
    pub fn scan_includes<'a, I>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .filter(|line| self.is_include(line))
            .map(|line| line.trim().to_string())
            .collect()
    }
}
