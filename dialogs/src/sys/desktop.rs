use crate::{
    CameraPicker, DialogError, DirectoryPicker, FilePicker, FileSaver, PickerMode, PickerType,
    ShareSettings,
};
use pickkit_file::PlatformFile;

/// Extension filters standing in for the mobile visual-media picker types.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "heic", "heif"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm", "m4v"];

fn apply_type_filter(builder: rfd::AsyncFileDialog, type_: &PickerType) -> rfd::AsyncFileDialog {
    match type_ {
        PickerType::Image => builder.add_filter("Images", IMAGE_EXTENSIONS),
        PickerType::Video => builder.add_filter("Videos", VIDEO_EXTENSIONS),
        PickerType::ImageAndVideo => {
            let mut extensions =
                Vec::with_capacity(IMAGE_EXTENSIONS.len() + VIDEO_EXTENSIONS.len());
            extensions.extend_from_slice(IMAGE_EXTENSIONS);
            extensions.extend_from_slice(VIDEO_EXTENSIONS);
            builder.add_filter("Images and videos", &extensions)
        }
        PickerType::File {
            extensions: Some(extensions),
        } if !extensions.is_empty() => {
            let extensions: Vec<&str> = extensions.iter().map(String::as_str).collect();
            builder.add_filter("Files", &extensions)
        }
        // No allow-list means an unrestricted dialog.
        PickerType::File { .. } => builder,
    }
}

/// Show a file picker.
///
/// # Errors
/// Returns an error if the native dialog fails to show.
pub async fn pick_files(picker: FilePicker) -> Result<Option<Vec<PlatformFile>>, DialogError> {
    let mut builder = rfd::AsyncFileDialog::new();

    if let Some(title) = &picker.title {
        builder = builder.set_title(title);
    }
    if let Some(directory) = &picker.directory {
        builder = builder.set_directory(directory);
    }
    builder = apply_type_filter(builder, &picker.type_);

    let files = match picker.mode {
        // A cap of one routes to the single-item dialog, like the mobile
        // visual-media picker does.
        PickerMode::Single
        | PickerMode::Multiple {
            max_items: Some(1),
        } => builder.pick_file().await.map(|file| vec![file]),
        PickerMode::Multiple { .. } => builder.pick_files().await,
    };

    Ok(files.map(|files| {
        files
            .iter()
            .map(|file| PlatformFile::from_path(file.path()))
            .collect()
    }))
}

/// Show a save-location chooser.
///
/// rfd does not create the file; the handle points at the chosen
/// destination, so no placeholder cleanup is needed here.
///
/// # Errors
/// Returns an error if the native dialog fails to show.
pub async fn save_file(saver: FileSaver) -> Result<Option<PlatformFile>, DialogError> {
    let mut builder = rfd::AsyncFileDialog::new().set_file_name(saver.file_name());

    if let Some(directory) = &saver.directory {
        builder = builder.set_directory(directory);
    }
    if let Some(extension) = &saver.extension {
        builder = builder.add_filter(extension.to_uppercase(), &[extension.as_str()]);
    }

    Ok(builder
        .save_file()
        .await
        .map(|file| PlatformFile::from_path(file.path())))
}

/// Show a chooser restricted to directories.
///
/// # Errors
/// Returns an error if the native dialog fails to show.
pub async fn pick_directory(picker: DirectoryPicker) -> Result<Option<PlatformFile>, DialogError> {
    let mut builder = rfd::AsyncFileDialog::new();

    if let Some(title) = &picker.title {
        builder = builder.set_title(title);
    }
    if let Some(directory) = &picker.directory {
        builder = builder.set_directory(directory);
    }

    Ok(builder
        .pick_folder()
        .await
        .map(|folder| PlatformFile::from_path(folder.path())))
}

/// Camera capture has no desktop dialog surface.
///
/// # Errors
/// Always returns [`DialogError::NotSupported`].
pub async fn capture(_picker: CameraPicker) -> Result<Option<PlatformFile>, DialogError> {
    Err(DialogError::NotSupported(
        "camera capture has no desktop dialog surface".into(),
    ))
}

/// Hand the file to the platform opener.
///
/// # Errors
/// Returns an error if the handle has no filesystem path or the opener
/// cannot be spawned.
pub fn share(file: &PlatformFile, _settings: &ShareSettings) -> Result<(), DialogError> {
    let path = file
        .path()
        .ok_or_else(|| DialogError::PlatformError("handle has no filesystem path".into()))?;

    log::debug!("handing {} to the platform opener", path.display());

    // Detached, so a dismissed or stuck handler cannot block the caller.
    open::that_detached(path)?;
    Ok(())
}
