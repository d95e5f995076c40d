use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A fully rendered output file waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub file_name: String,
    pub contents: String,
}

impl RenderedFile {
    pub fn new(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }
}

/// Writes generated sources into one output directory.
///
/// Files are written one after another; a failure part way through leaves
/// the files written before it in place.
pub struct FileWriter {
    output_path: PathBuf,
    generated_files: Vec<String>,
}

impl FileWriter {
    pub fn new<P: AsRef<Path>>(output_path: P) -> Result<Self> {
        let output_path = output_path.as_ref().to_path_buf();
        fs::create_dir_all(&output_path).map_err(|source| Error::Write {
            path: output_path.clone(),
            source,
        })?;
        Ok(Self {
            output_path,
            generated_files: Vec::new(),
        })
    }

    /// Write (or overwrite) a single file
    pub fn write_file(&mut self, file: &RenderedFile) -> Result<PathBuf> {
        let file_path = self.output_path.join(&file.file_name);
        fs::write(&file_path, &file.contents).map_err(|source| Error::Write {
            path: file_path.clone(),
            source,
        })?;
        self.generated_files.push(file.file_name.clone());
        Ok(file_path)
    }

    /// Write every file in order, stopping at the first failure
    pub fn write_all(&mut self, files: &[RenderedFile]) -> Result<()> {
        for file in files {
            self.write_file(file)?;
        }
        Ok(())
    }

    /// Names of the files written so far
    pub fn get_generated_files(&self) -> &[String] {
        &self.generated_files
    }

    pub fn get_output_path(&self) -> &Path {
        &self.output_path
    }
}
