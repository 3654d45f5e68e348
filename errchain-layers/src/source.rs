//! # File Sources
//!
//! Where the low layer reads bytes from. The filesystem is one backend; an
//! in-memory map is another, used for tests and dry runs.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// File source trait
pub trait FileSource: Send + Sync {
    /// Read the whole file at `path` as UTF-8 text
    fn read(&self, path: &str) -> io::Result<String>;
}

impl<S: FileSource + ?Sized> FileSource for &S {
    fn read(&self, path: &str) -> io::Result<String> {
        (**self).read(path)
    }
}

impl<S: FileSource + ?Sized> FileSource for Box<S> {
    fn read(&self, path: &str) -> io::Result<String> {
        (**self).read(path)
    }
}

/// In-memory files (volatile, but useful for testing)
///
/// Paths that were never inserted report `NotFound`; paths passed to
/// [`MemorySource::deny`] report `PermissionDenied`.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
    denied: HashSet<String>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Builder form of [`MemorySource::insert`]
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Make reads of `path` fail with `PermissionDenied`
    pub fn deny(mut self, path: impl Into<String>) -> Self {
        self.denied.insert(path.into());
        self
    }
}

impl FileSource for MemorySource {
    fn read(&self, path: &str) -> io::Result<String> {
        if self.denied.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("access to {} denied", path),
            ));
        }
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path))
        })
    }
}

/// Filesystem-backed source
///
/// Relative paths are resolved against `root` when one is set.
#[derive(Debug, Clone, Default)]
pub struct FsSource {
    root: Option<PathBuf>,
}

impl FsSource {
    /// Read paths as given, relative to the working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `root`
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: Some(root.as_ref().to_path_buf()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => PathBuf::from(path),
        }
    }
}

impl FileSource for FsSource {
    fn read(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(self.resolve(path))
    }
}
