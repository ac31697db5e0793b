use std::path::{Path, PathBuf};

/// A path-backed file handle.
#[derive(Debug, Clone)]
pub struct FileInner {
    path: PathBuf,
}

impl FileInner {
    pub(crate) const fn from_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
