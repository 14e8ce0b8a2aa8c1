//! In-memory test double for the [`Environment`] capability.
//!
//! Backends resolve credentials from environment variables and small local
//! files; tests build a `MemoryEnvironment` instead of mutating the process
//! environment or touching the real filesystem.

use std::collections::HashMap;
use std::io;

use crate::env::Environment;

/// An [`Environment`] backed by in-memory maps.
///
/// Reading a path that was never added behaves like a missing file
/// (`io::ErrorKind::NotFound`), which is how tests exercise unreadable
/// file paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnvironment {
    vars: HashMap<String, String>,
    files: HashMap<String, String>,
}

impl MemoryEnvironment {
    /// Create an empty environment: no variables, no files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an environment variable.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Add a readable file at `path` with the given contents.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

impl Environment for MemoryEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn read_file(&self, path: &str) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {path}"))
        })
    }
}
