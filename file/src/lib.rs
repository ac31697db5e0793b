//! Cross-platform file handles.
//!
//! This crate provides [`PlatformFile`], an opaque reference to a file or
//! directory on the host platform's storage, abstracting over the
//! path/URI/DOM-file differences between desktop, Android, iOS, and the
//! web, plus [`PickFs`] for locating transient storage.

/// Platform-specific implementations.
pub mod sys;

use std::path::{Path, PathBuf};

/// An opaque handle to a file or directory on the host platform.
///
/// On desktop and iOS this wraps a filesystem path. On Android it wraps
/// either a path or a `content://` document URI. On the web it wraps the
/// DOM `File` object selected by the user.
#[derive(Debug, Clone)]
pub struct PlatformFile {
    inner: sys::FileInner,
}

impl PlatformFile {
    /// The display name of the file, including its extension.
    #[must_use]
    pub fn name(&self) -> String {
        self.inner.name()
    }

    /// The file extension, without the leading dot.
    ///
    /// Returns `None` for extension-less names and for dot-files.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let name = self.name();
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext.to_string()),
            _ => None,
        }
    }

    /// The filesystem path backing this handle, if it has one.
    ///
    /// Android content URIs and web files have no path.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.inner.path()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PlatformFile {
    /// Create a handle from a filesystem path.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: sys::FileInner::from_path(path.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<PathBuf> for PlatformFile {
    fn from(path: PathBuf) -> Self {
        Self::from_path(path)
    }
}

#[cfg(target_os = "android")]
impl PlatformFile {
    /// Create a handle from a `content://` document URI.
    #[must_use]
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self {
            inner: sys::FileInner::from_uri(uri.into()),
        }
    }

    /// The document URI backing this handle, if it has one.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.inner.uri()
    }
}

#[cfg(target_arch = "wasm32")]
impl PlatformFile {
    /// Create a handle from a DOM `File`.
    #[must_use]
    pub fn from_web_file(file: web_sys::File) -> Self {
        Self {
            inner: sys::FileInner::from_web_file(file),
        }
    }

    /// The DOM `File` backing this handle.
    #[must_use]
    pub fn web_file(&self) -> &web_sys::File {
        self.inner.web_file()
    }
}

/// Transient storage lookup.
///
/// Camera capture output and saver placeholders go through these
/// directories. Platforms where the native helper owns the cache location
/// (Android, web) report `None` and handle storage on the native side.
#[derive(Debug, Clone, Copy, Default)]
pub struct PickFs;

impl PickFs {
    /// The per-user cache directory.
    #[must_use]
    pub fn cache_dir() -> Option<PathBuf> {
        #[cfg(not(any(target_os = "android", target_arch = "wasm32")))]
        {
            dirs::cache_dir()
        }
        #[cfg(any(target_os = "android", target_arch = "wasm32"))]
        {
            None
        }
    }

    /// The process temporary directory.
    #[must_use]
    pub fn temp_dir() -> Option<PathBuf> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Some(std::env::temp_dir())
        }
        #[cfg(target_arch = "wasm32")]
        {
            None
        }
    }
}

#[cfg(all(test, not(any(target_os = "android", target_arch = "wasm32"))))]
mod tests {
    use super::*;

    #[test]
    fn name_is_final_path_component() {
        let file = PlatformFile::from_path("/tmp/photos/holiday.jpeg");
        assert_eq!(file.name(), "holiday.jpeg");
    }

    #[test]
    fn extension_is_parsed_from_name() {
        let file = PlatformFile::from_path("/tmp/report.pdf");
        assert_eq!(file.extension().as_deref(), Some("pdf"));
    }

    #[test]
    fn dotfiles_and_bare_names_have_no_extension() {
        assert_eq!(PlatformFile::from_path("/home/user/.bashrc").extension(), None);
        assert_eq!(PlatformFile::from_path("/home/user/Makefile").extension(), None);
    }

    #[test]
    fn path_round_trips_on_native_targets() {
        let file = PlatformFile::from_path("/tmp/a/b.txt");
        assert_eq!(file.path(), Some(Path::new("/tmp/a/b.txt")));
    }

    #[test]
    fn temp_dir_exists_on_native_targets() {
        let dir = PickFs::temp_dir().expect("native targets have a temp dir");
        assert!(dir.is_dir());
    }
}
