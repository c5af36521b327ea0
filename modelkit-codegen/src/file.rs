use std::path::{Path, PathBuf};

use modelkit_manifest::{Error, Result};

/// A source file loaded fully into memory for in-place rewriting.
///
/// Files are read whole, transformed as text and written back whole.
#[derive(Debug)]
pub struct SourceFile {
    path: PathBuf,
    original: String,
    content: String,
}

impl SourceFile {
    /// Read the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::read(&path, e))?;
        Ok(Self {
            path,
            original: content.clone(),
            content,
        })
    }

    /// Get the current (possibly transformed) content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the in-memory content
    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Whether the content differs from what was read
    pub fn is_modified(&self) -> bool {
        self.content != self.original
    }

    /// Write the current content back to the file, replacing it entirely.
    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, &self.content).map_err(|e| Error::write(&self.path, e))
    }
}
