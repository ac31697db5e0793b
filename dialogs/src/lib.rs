//! Cross-platform native file dialogs.
//!
//! Five operations with identical result semantics on desktop, Android,
//! iOS, and the web: file picker, file saver, directory picker, camera
//! capture, and the system share sheet. Each platform adapter turns the
//! native asynchronous dialog primitive into a single `async` call; user
//! cancellation is always `Ok(None)`, never an error.
//!
//! Call `init()` once before the first dialog (on Android,
//! `init_with_context`). Invoking any operation earlier fails synchronously
//! with [`DialogError::NotInitialized`] and never presents a dialog.
//!
//! ```rust,no_run
//! use pickkit_dialogs::{FilePicker, PickerMode, PickerType};
//!
//! async fn choose_photos() {
//!     pickkit_dialogs::init();
//!     let picked = FilePicker::new()
//!         .with_type(PickerType::Image)
//!         .with_mode(PickerMode::Multiple { max_items: Some(5) })
//!         .pick()
//!         .await;
//!     if let Ok(Some(files)) = picked {
//!         for file in files {
//!             println!("picked {}", file.name());
//!         }
//!     }
//! }
//! ```

#![warn(missing_docs)]

mod error;
pub use error::DialogError;

/// Platform-specific implementations.
pub mod sys;

pub use pickkit_file::PlatformFile;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

static READY: AtomicBool = AtomicBool::new(false);

/// Mark the dialog environment as ready.
///
/// Must be called once per process before the first dialog; calling it
/// again is a no-op. On Android use `init_with_context` instead, which
/// also loads the embedded helper.
#[cfg(not(target_os = "android"))]
pub fn init() {
    READY.store(true, Ordering::SeqCst);
}

#[cfg(target_os = "android")]
pub use sys::init_with_context;

#[cfg(target_os = "android")]
pub(crate) fn mark_initialized() {
    READY.store(true, Ordering::SeqCst);
}

fn ensure_initialized() -> Result<(), DialogError> {
    if READY.load(Ordering::SeqCst) {
        Ok(())
    } else {
        Err(DialogError::NotInitialized)
    }
}

/// Restricts what a file picker lets the user select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerType {
    /// Images only.
    Image,
    /// Videos only.
    Video,
    /// Images and videos.
    ImageAndVideo,
    /// Arbitrary files, optionally restricted to an extension allow-list.
    File {
        /// Allowed extensions without the leading dot. `None` or an empty
        /// list means any file; extensions the platform cannot map to a
        /// content type fall back to an unrestricted filter.
        extensions: Option<Vec<String>>,
    },
}

impl PickerType {
    /// Arbitrary files with no extension restriction.
    #[must_use]
    pub const fn any_file() -> Self {
        Self::File { extensions: None }
    }

    /// Arbitrary files restricted to the given extensions.
    pub fn files_with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::File {
            extensions: Some(extensions.into_iter().map(Into::into).collect()),
        }
    }
}

impl Default for PickerType {
    fn default() -> Self {
        Self::any_file()
    }
}

/// Whether a picker returns one item or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerMode {
    /// Exactly one item may be selected.
    #[default]
    Single,
    /// Several items may be selected.
    Multiple {
        /// Upper bound on the selection; unbounded when `None`. A cap of
        /// `1` routes to the platform's single-item dialog but keeps the
        /// list result shape. A cap of `0` is a programmer error.
        max_items: Option<usize>,
    },
}

impl PickerMode {
    /// Reject mode combinations that no dialog could satisfy.
    ///
    /// Runs before the initialization check and before any dialog shows.
    fn validate(self) -> Result<(), DialogError> {
        if let Self::Multiple { max_items: Some(0) } = self {
            return Err(DialogError::InvalidMode(
                "a multiple-selection cap must allow at least one item".into(),
            ));
        }
        Ok(())
    }

    /// Clamp a platform selection to the shape this mode promises.
    ///
    /// Order is preserved; the cap is a final safety net on top of the
    /// native dialog's own limit.
    fn shape(self, mut files: Vec<PlatformFile>) -> Vec<PlatformFile> {
        let cap = match self {
            Self::Single => 1,
            Self::Multiple {
                max_items: Some(cap),
            } => cap,
            Self::Multiple { max_items: None } => return files,
        };
        files.truncate(cap);
        files
    }
}

/// What the camera capture UI records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraType {
    /// A still photo.
    #[default]
    Photo,
    /// A video clip.
    Video,
}

/// Platform options for [`share_file`].
#[derive(Debug, Clone, Default)]
pub struct ShareSettings {
    /// Android `FileProvider` authority used to expose path-backed handles
    /// to other apps. Ignored on other platforms.
    pub authority: Option<String>,
}

impl ShareSettings {
    /// Set the Android `FileProvider` authority.
    #[must_use]
    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = Some(authority.into());
        self
    }
}

/// A native file picker dialog.
#[derive(Debug, Clone, Default)]
pub struct FilePicker {
    type_: PickerType,
    mode: PickerMode,
    title: Option<String>,
    directory: Option<PathBuf>,
}

impl FilePicker {
    /// Create a picker for any single file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict selectable content.
    #[must_use]
    pub fn with_type(mut self, type_: PickerType) -> Self {
        self.type_ = type_;
        self
    }

    /// Set the selection mode.
    #[must_use]
    pub fn with_mode(mut self, mode: PickerMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the dialog title, where the platform shows one.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the starting directory.
    #[must_use]
    pub fn set_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Show the picker and resolve with the selection.
    ///
    /// `Ok(None)` means the user dismissed the dialog. The returned list
    /// preserves the platform's selection order and never exceeds the
    /// mode's cap.
    ///
    /// # Errors
    /// [`DialogError::InvalidMode`] for an unsatisfiable mode,
    /// [`DialogError::NotInitialized`] before initialization, or a platform
    /// error from the native dialog.
    pub async fn pick(self) -> Result<Option<Vec<PlatformFile>>, DialogError> {
        self.mode.validate()?;
        ensure_initialized()?;
        log::debug!("opening file picker ({:?}, {:?})", self.type_, self.mode);
        let mode = self.mode;
        let files = sys::pick_files(self).await?;
        Ok(files.map(|files| mode.shape(files)))
    }

    /// Show the picker in single-selection mode and resolve with at most
    /// one handle.
    ///
    /// # Errors
    /// Same as [`FilePicker::pick`].
    pub async fn pick_one(self) -> Result<Option<PlatformFile>, DialogError> {
        let picked = Self {
            mode: PickerMode::Single,
            ..self
        }
        .pick()
        .await?;
        Ok(picked.and_then(|files| files.into_iter().next()))
    }
}

/// A native save-location chooser.
#[derive(Debug, Clone)]
pub struct FileSaver {
    suggested_name: String,
    extension: Option<String>,
    directory: Option<PathBuf>,
}

impl FileSaver {
    /// Create a saver seeded with a suggested file name (without extension).
    pub fn new(suggested_name: impl Into<String>) -> Self {
        Self {
            suggested_name: suggested_name.into(),
            extension: None,
            directory: None,
        }
    }

    /// Set the suggested extension, without the leading dot.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Set the starting directory.
    #[must_use]
    pub fn set_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// The destination file name the dialog is seeded with.
    pub(crate) fn file_name(&self) -> String {
        compose_file_name(&self.suggested_name, self.extension.as_deref())
    }

    /// Show the chooser and resolve with a handle to the destination.
    ///
    /// The destination may not exist yet; the caller writes the content.
    /// `Ok(None)` means the user dismissed the dialog.
    ///
    /// # Errors
    /// [`DialogError::NotInitialized`] before initialization, or a platform
    /// error from the native dialog.
    pub async fn save(self) -> Result<Option<PlatformFile>, DialogError> {
        ensure_initialized()?;
        log::debug!("opening file saver for {:?}", self.file_name());
        sys::save_file(self).await
    }
}

/// A native directory chooser.
#[derive(Debug, Clone, Default)]
pub struct DirectoryPicker {
    title: Option<String>,
    directory: Option<PathBuf>,
}

impl DirectoryPicker {
    /// Create a directory chooser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dialog title, where the platform shows one.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the starting directory.
    #[must_use]
    pub fn set_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Show the chooser, restricted to directories.
    ///
    /// `Ok(None)` means the user dismissed the dialog.
    ///
    /// # Errors
    /// [`DialogError::NotInitialized`] before initialization, or a platform
    /// error from the native dialog.
    pub async fn pick(self) -> Result<Option<PlatformFile>, DialogError> {
        ensure_initialized()?;
        sys::pick_directory(self).await
    }
}

/// The device camera capture UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraPicker {
    type_: CameraType,
}

impl CameraPicker {
    /// Create a photo capture dialog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set what the capture UI records.
    #[must_use]
    pub const fn with_type(mut self, type_: CameraType) -> Self {
        self.type_ = type_;
        self
    }

    /// Show the capture UI and resolve with the captured media, written to
    /// a transient cache location.
    ///
    /// `Ok(None)` covers both an aborted capture and a capture that failed
    /// to persist; callers cannot distinguish the two.
    ///
    /// # Errors
    /// [`DialogError::NotInitialized`] before initialization, or
    /// [`DialogError::NotSupported`] on platforms without a camera dialog.
    pub async fn capture(self) -> Result<Option<PlatformFile>, DialogError> {
        ensure_initialized()?;
        sys::capture(self).await
    }
}

/// Hand a file to the platform's native share/export surface.
///
/// Fire-and-forget: the call returns as soon as the surface is presented
/// and reports nothing about what the user did with it.
///
/// # Errors
/// [`DialogError::NotInitialized`] before initialization, or a platform error if
/// the handle cannot be exposed to the share surface.
pub fn share_file(file: &PlatformFile, settings: &ShareSettings) -> Result<(), DialogError> {
    ensure_initialized()?;
    sys::share(file, settings)
}

/// Compose the destination name a saver is seeded with.
///
/// A `/` in the suggested name would be read as a directory separator by
/// the native panels, so it is replaced with `:` before composing.
fn compose_file_name(suggested_name: &str, extension: Option<&str>) -> String {
    let name = suggested_name.replace('/', ":");
    match extension {
        Some(extension) => format!("{name}.{extension}"),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles(names: &[&str]) -> Vec<PlatformFile> {
        names
            .iter()
            .map(|name| PlatformFile::from_path(format!("/tmp/{name}")))
            .collect()
    }

    fn names(files: &[PlatformFile]) -> Vec<String> {
        files.iter().map(PlatformFile::name).collect()
    }

    #[test]
    fn single_and_capped_modes_are_valid() {
        assert!(PickerMode::Single.validate().is_ok());
        assert!(
            PickerMode::Multiple {
                max_items: Some(1)
            }
            .validate()
            .is_ok()
        );
        assert!(PickerMode::Multiple { max_items: None }.validate().is_ok());
    }

    #[test]
    fn zero_capped_multiple_mode_is_rejected() {
        let err = PickerMode::Multiple {
            max_items: Some(0),
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, DialogError::InvalidMode(_)));
    }

    #[tokio::test]
    async fn mode_misuse_fails_before_any_other_check() {
        // Deliberately uninitialized: validation must come first.
        let err = FilePicker::new()
            .with_mode(PickerMode::Multiple {
                max_items: Some(0),
            })
            .pick()
            .await
            .unwrap_err();
        assert!(matches!(err, DialogError::InvalidMode(_)));
    }

    #[test]
    fn shaping_preserves_selection_order() {
        let shaped = PickerMode::Multiple { max_items: None }.shape(handles(&["c", "a", "b"]));
        assert_eq!(names(&shaped), ["c", "a", "b"]);
    }

    #[test]
    fn shaping_clamps_to_max_items() {
        let shaped = PickerMode::Multiple {
            max_items: Some(2),
        }
        .shape(handles(&["one", "two", "three"]));
        assert_eq!(names(&shaped), ["one", "two"]);
    }

    #[test]
    fn single_mode_shapes_to_at_most_one() {
        let shaped = PickerMode::Single.shape(handles(&["first", "second"]));
        assert_eq!(names(&shaped), ["first"]);
        assert!(PickerMode::Single.shape(Vec::new()).is_empty());
    }

    #[test]
    fn saver_composes_name_and_extension() {
        let saver = FileSaver::new("report").with_extension("pdf");
        assert_eq!(saver.file_name(), "report.pdf");
    }

    #[test]
    fn saver_without_extension_keeps_bare_name() {
        assert_eq!(FileSaver::new("notes").file_name(), "notes");
    }

    #[test]
    fn slashes_in_suggested_names_are_sanitized() {
        assert_eq!(
            compose_file_name("q1/q2 summary", Some("csv")),
            "q1:q2 summary.csv"
        );
    }

    #[test]
    fn extension_allow_list_builds_from_any_string_kind() {
        let type_ = PickerType::files_with_extensions(["pdf", "txt"]);
        assert_eq!(
            type_,
            PickerType::File {
                extensions: Some(vec!["pdf".into(), "txt".into()])
            }
        );
    }
}
