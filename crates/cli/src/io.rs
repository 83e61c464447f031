//! Output file helpers.

use std::{
    fs::{create_dir_all, write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// A generated text file.
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `contents`, creating the parent directory first.
    pub fn write(&self, contents: impl AsRef<[u8]>) -> Result<()> {
        self.ensure_parent_dir()?;
        write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    /// Create parent directory if it doesn't exist.
    pub fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        Ok(())
    }
}

/// Write `contents` to `path` when one was given. Returns whether anything was written.
pub fn write_optional(path: Option<&Path>, contents: &str) -> Result<bool> {
    match path {
        Some(path) => {
            let file = OutputFile::new(path);
            file.write(contents)?;
            println!("Wrote {}", file.path().display());
            Ok(true)
        }
        None => Ok(false),
    }
}
