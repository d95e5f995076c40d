#![allow(dead_code)]
/// Common test utilities and helpers
use cpp_classgen::{
    CodeGenerator, GenerationKind, GenerationOutcome, GenerationRequest, TemplateLoader,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const YEAR: i32 = 2024;

/// Scratch directory holding interface headers used as generator input
pub struct TestProject {
    pub temp_dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Write a file into the project and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let file_path = self.temp_dir.path().join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&file_path, content).unwrap();
        file_path
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Scratch output directory plus helpers for inspecting generated files
pub struct TestOutput {
    pub output_dir: TempDir,
}

impl TestOutput {
    pub fn new() -> Self {
        Self {
            output_dir: TempDir::new().unwrap(),
        }
    }

    /// Generate with the built-in templates
    pub fn generate(
        &self,
        kind: GenerationKind,
        input: impl Into<PathBuf>,
    ) -> cpp_classgen::Result<GenerationOutcome> {
        self.generate_with(TemplateLoader::embedded(), kind, input)
    }

    pub fn generate_with(
        &self,
        templates: TemplateLoader,
        kind: GenerationKind,
        input: impl Into<PathBuf>,
    ) -> cpp_classgen::Result<GenerationOutcome> {
        let request = GenerationRequest::new(kind, input)
            .with_output_path(self.path())
            .with_year(YEAR);
        CodeGenerator::new(templates).generate(&request)
    }

    pub fn path(&self) -> &Path {
        self.output_dir.path()
    }

    pub fn read_file(&self, filename: &str) -> String {
        fs::read_to_string(self.path().join(filename)).unwrap()
    }

    pub fn file_exists(&self, filename: &str) -> bool {
        self.path().join(filename).exists()
    }

    /// Sorted names of every entry in the output directory
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

/// Assert that generated content contains expected string
#[macro_export]
macro_rules! assert_generated_contains {
    ($content:expr, $expected:expr) => {
        assert!(
            $content.contains($expected),
            "Expected generated content to contain:\n{}\n\nBut got:\n{}",
            $expected,
            $content
        );
    };
}

/// Assert that no `{{...}}` placeholder survived rendering
#[macro_export]
macro_rules! assert_fully_rendered {
    ($content:expr) => {
        let leftovers =
            cpp_classgen::generators::base::renderer::unresolved_placeholders(&$content);
        assert!(
            leftovers.is_empty(),
            "Unresolved placeholders {:?} in:\n{}",
            leftovers,
            $content
        );
    };
}
