use std::path::{Path, PathBuf};

/// A handle backed by either a filesystem path or a SAF document URI.
#[derive(Debug, Clone)]
pub enum FileInner {
    /// A plain filesystem path, e.g. a file in the app cache dir.
    Path(PathBuf),
    /// A `content://` document URI issued by the storage access framework.
    Uri(String),
}

impl FileInner {
    pub(crate) const fn from_path(path: PathBuf) -> Self {
        Self::Path(path)
    }

    pub(crate) const fn from_uri(uri: String) -> Self {
        Self::Uri(uri)
    }

    pub(crate) fn name(&self) -> String {
        match self {
            Self::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            // Document URIs encode the display name in the final segment;
            // full resolution goes through the content resolver in the
            // dialog helper.
            Self::Uri(uri) => uri
                .replace("%2F", "/")
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            Self::Uri(_) => None,
        }
    }

    pub(crate) fn uri(&self) -> Option<&str> {
        match self {
            Self::Path(_) => None,
            Self::Uri(uri) => Some(uri),
        }
    }
}
