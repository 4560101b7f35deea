//! # Project Handle
//!
//! Owns a document snapshot outside any live session. Projects can be:
//! - **Memory-backed**: temporary, for testing or in-memory work
//! - **File-backed**: JSON on disk with a dirty flag
//!
//! A project stores only the persistent document; transient view state
//! never reaches disk. The version counter increments on every accepted
//! snapshot update, letting collaborators cheaply detect staleness.

use std::path::PathBuf;

use pagecraft_model::Document;

use crate::errors::EditorError;

/// A stored page-builder project.
#[derive(Debug)]
pub struct Project {
    /// Display name (for file-backed projects, derived from the file stem).
    pub name: String,

    /// Increments on each accepted snapshot update.
    pub version: u64,

    storage: ProjectStorage,
}

/// Storage backend for a project.
#[derive(Debug)]
pub enum ProjectStorage {
    /// In-memory only.
    Memory { document: Document },

    /// JSON file on disk.
    File {
        path: PathBuf,
        document: Document,
        dirty: bool,
    },
}

impl Project {
    /// Create a memory-backed project from a document.
    pub fn in_memory(name: impl Into<String>, document: Document) -> Result<Self, EditorError> {
        document.validate()?;
        Ok(Self {
            name: name.into(),
            version: 0,
            storage: ProjectStorage::Memory { document },
        })
    }

    /// Create a file-backed project that has not been saved yet.
    pub fn create(path: PathBuf, document: Document) -> Result<Self, EditorError> {
        document.validate()?;
        Ok(Self {
            name: name_from_path(&path),
            version: 0,
            storage: ProjectStorage::File {
                path,
                document,
                dirty: true,
            },
        })
    }

    /// Load a project from a JSON file, rejecting documents that violate
    /// the structural invariants.
    pub fn load(path: PathBuf) -> Result<Self, EditorError> {
        let raw = std::fs::read_to_string(&path)?;
        let document: Document = serde_json::from_str(&raw)?;
        document.validate()?;
        tracing::info!("loaded project from {}", path.display());

        Ok(Self {
            name: name_from_path(&path),
            version: 0,
            storage: ProjectStorage::File {
                path,
                document,
                dirty: false,
            },
        })
    }

    pub fn document(&self) -> &Document {
        match &self.storage {
            ProjectStorage::Memory { document } => document,
            ProjectStorage::File { document, .. } => document,
        }
    }

    /// Replace the stored snapshot, typically with a session's
    /// [`snapshot()`](crate::EditSession::snapshot).
    pub fn update(&mut self, document: Document) -> Result<(), EditorError> {
        document.validate()?;
        self.version += 1;
        match &mut self.storage {
            ProjectStorage::Memory { document: stored } => {
                *stored = document;
            }
            ProjectStorage::File {
                document: stored,
                dirty,
                ..
            } => {
                *stored = document;
                *dirty = true;
            }
        }
        Ok(())
    }

    /// True if a file-backed project has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        match &self.storage {
            ProjectStorage::File { dirty, .. } => *dirty,
            ProjectStorage::Memory { .. } => false,
        }
    }

    /// Write the document to disk as JSON (file-backed only).
    pub fn save(&mut self) -> Result<(), EditorError> {
        match &mut self.storage {
            ProjectStorage::File {
                path,
                document,
                dirty,
            } => {
                let json = serde_json::to_string_pretty(document)?;
                std::fs::write(path.as_path(), json)?;
                *dirty = false;
                tracing::info!("saved project to {}", path.display());
                Ok(())
            }
            ProjectStorage::Memory { .. } => Err(EditorError::NotFileBacked),
        }
    }
}

fn name_from_path(path: &std::path::Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untitled".to_string())
}
