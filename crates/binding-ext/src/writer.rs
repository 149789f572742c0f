//! Sinks for generated source files.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::{ProcessError, Result};

/// Destination for generated sources, addressed by canonical class name.
pub trait SourceWriter {
    fn write_to_file(&mut self, canonical_name: &str, contents: &str) -> Result<()>;
}

/// Keeps generated files in memory, in the order they were first written.
#[derive(Debug, Default, Clone)]
pub struct MemorySourceWriter {
    files: IndexMap<String, String>,
}

impl MemorySourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, canonical_name: &str) -> Option<&str> {
        self.files.get(canonical_name).map(String::as_str)
    }

    pub fn files(&self) -> &IndexMap<String, String> {
        &self.files
    }

    pub fn into_files(self) -> IndexMap<String, String> {
        self.files
    }
}

impl SourceWriter for MemorySourceWriter {
    fn write_to_file(&mut self, canonical_name: &str, contents: &str) -> Result<()> {
        log::debug!("buffering {canonical_name} ({} bytes)", contents.len());
        self.files
            .insert(canonical_name.to_string(), contents.to_string());
        Ok(())
    }
}

/// Writes `a.b.C` to `<root>/a/b/C.java`.
#[derive(Debug, Clone)]
pub struct FsSourceWriter {
    root: PathBuf,
}

impl FsSourceWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path the file for `canonical_name` is written to.
    pub fn path_for(&self, canonical_name: &str) -> Result<PathBuf> {
        let segments = canonical_name.split('.').collect::<Vec<_>>();
        let invalid = segments
            .iter()
            .any(|segment| segment.is_empty() || segment.contains(['/', '\\']));
        let Some((class_name, packages)) = segments.split_last().filter(|_| !invalid) else {
            return Err(ProcessError::InvalidCanonicalName(
                canonical_name.to_string(),
            ));
        };

        let mut path = self.root.clone();
        path.extend(packages);
        path.push(format!("{class_name}.java"));
        Ok(path)
    }
}

impl SourceWriter for FsSourceWriter {
    fn write_to_file(&mut self, canonical_name: &str, contents: &str) -> Result<()> {
        let path = self.path_for(canonical_name)?;
        let io_err = |source| ProcessError::Io {
            canonical_name: canonical_name.to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&path, contents).map_err(io_err)?;
        log::debug!("wrote {canonical_name} to {}", path.display());
        Ok(())
    }
}
