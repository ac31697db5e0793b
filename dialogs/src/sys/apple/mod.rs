use crate::{
    CameraPicker, CameraType, DialogError, DirectoryPicker, FilePicker, FileSaver, PickerMode,
    PickerType, ShareSettings,
};
use futures::channel::oneshot;
use pickkit_file::{PickFs, PlatformFile};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};

// Each dialog call registers its sender under a fresh id, so overlapping
// calls cannot corrupt each other's pending continuation. The registry
// keeps the sender alive until the Swift delegate fires exactly once.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn multi_callbacks() -> &'static Mutex<HashMap<u64, oneshot::Sender<Option<Vec<String>>>>> {
    static LOCK: OnceLock<Mutex<HashMap<u64, oneshot::Sender<Option<Vec<String>>>>>> =
        OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(HashMap::new()))
}

fn single_callbacks() -> &'static Mutex<HashMap<u64, oneshot::Sender<Option<String>>>> {
    static LOCK: OnceLock<Mutex<HashMap<u64, oneshot::Sender<Option<String>>>>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(HashMap::new()))
}

#[swift_bridge::bridge]
mod ffi {
    extern "Swift" {
        fn show_file_picker_bridge(
            type_id: &str,
            extensions: Vec<String>,
            multiple: bool,
            max_items: u64,
            directory: &str,
            cb_id: u64,
        );
        fn show_file_saver_bridge(placeholder_path: &str, directory: &str, cb_id: u64);
        fn show_directory_picker_bridge(directory: &str, cb_id: u64);
        fn show_camera_picker_bridge(output_path: &str, capture_video: bool, cb_id: u64);
        fn share_file_bridge(path: &str);
    }

    extern "Rust" {
        fn on_files_picked(cb_id: u64, paths: Vec<String>);
        fn on_picker_cancelled(cb_id: u64);
        fn on_single_result(cb_id: u64, path: Option<String>);
    }
}

fn on_files_picked(cb_id: u64, paths: Vec<String>) {
    if let Ok(mut map) = multi_callbacks().lock() {
        if let Some(tx) = map.remove(&cb_id) {
            let _ = tx.send(Some(paths));
        }
    }
}

fn on_picker_cancelled(cb_id: u64) {
    if let Ok(mut map) = multi_callbacks().lock() {
        if let Some(tx) = map.remove(&cb_id) {
            let _ = tx.send(None);
            return;
        }
    }
    if let Ok(mut map) = single_callbacks().lock() {
        if let Some(tx) = map.remove(&cb_id) {
            let _ = tx.send(None);
        }
    }
}

fn on_single_result(cb_id: u64, path: Option<String>) {
    if let Ok(mut map) = single_callbacks().lock() {
        if let Some(tx) = map.remove(&cb_id) {
            let _ = tx.send(path);
        }
    }
}

fn dropped() -> DialogError {
    DialogError::PlatformError("dialog callback dropped before resolving".into())
}

pub async fn pick_files(picker: FilePicker) -> Result<Option<Vec<PlatformFile>>, DialogError> {
    let (tx, rx) = oneshot::channel();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);

    multi_callbacks().lock().unwrap().insert(id, tx);

    let type_id = match picker.type_ {
        PickerType::Image => "image",
        PickerType::Video => "video",
        PickerType::ImageAndVideo => "image-and-video",
        PickerType::File { .. } => "file",
    };
    let extensions = match &picker.type_ {
        PickerType::File {
            extensions: Some(extensions),
        } => extensions.clone(),
        _ => Vec::new(),
    };
    let (multiple, max_items) = match picker.mode {
        PickerMode::Single => (false, 1),
        // Zero tells the photo picker "unbounded".
        PickerMode::Multiple { max_items } => (true, max_items.unwrap_or(0) as u64),
    };
    let directory = picker
        .directory
        .as_deref()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_default();

    ffi::show_file_picker_bridge(type_id, extensions, multiple, max_items, &directory, id);

    let paths = rx.await.map_err(|_| dropped())?;
    Ok(paths.map(|paths| paths.into_iter().map(PlatformFile::from_path).collect()))
}

pub async fn save_file(saver: FileSaver) -> Result<Option<PlatformFile>, DialogError> {
    // The export picker needs an existing file to export, so stage an
    // empty placeholder in the temp dir under the suggested name.
    let temp = PickFs::temp_dir()
        .ok_or_else(|| DialogError::PlatformError("no temporary directory".into()))?;
    let placeholder = temp.join(saver.file_name());
    std::fs::write(&placeholder, [])?;

    let (tx, rx) = oneshot::channel();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);

    single_callbacks().lock().unwrap().insert(id, tx);

    let directory = saver
        .directory
        .as_deref()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_default();

    ffi::show_file_saver_bridge(&placeholder.to_string_lossy(), &directory, id);

    let result = rx.await.map_err(|_| dropped())?;
    let _ = std::fs::remove_file(&placeholder);

    Ok(result.map(|path| {
        // The export picker leaves an empty copy at the confirmed
        // destination; remove it so only caller-written content ends up
        // there.
        let _ = std::fs::remove_file(&path);
        PlatformFile::from_path(path)
    }))
}

pub async fn pick_directory(picker: DirectoryPicker) -> Result<Option<PlatformFile>, DialogError> {
    let (tx, rx) = oneshot::channel();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);

    single_callbacks().lock().unwrap().insert(id, tx);

    let directory = picker
        .directory
        .as_deref()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_default();

    ffi::show_directory_picker_bridge(&directory, id);

    let path = rx.await.map_err(|_| dropped())?;
    Ok(path.map(PlatformFile::from_path))
}

pub async fn capture(picker: CameraPicker) -> Result<Option<PlatformFile>, DialogError> {
    let temp = PickFs::temp_dir()
        .ok_or_else(|| DialogError::PlatformError("no temporary directory".into()))?;

    let (tx, rx) = oneshot::channel();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);

    let extension = match picker.type_ {
        CameraType::Photo => "jpg",
        CameraType::Video => "mov",
    };
    let output = temp.join(format!("capture_{id}.{extension}"));

    single_callbacks().lock().unwrap().insert(id, tx);

    ffi::show_camera_picker_bridge(
        &output.to_string_lossy(),
        matches!(picker.type_, CameraType::Video),
        id,
    );

    let path = rx.await.map_err(|_| dropped())?;
    if path.is_none() {
        // Covers both an aborted capture and a persist failure.
        log::warn!("camera capture resolved without a file");
    }
    Ok(path.map(PlatformFile::from_path))
}

pub fn share(file: &PlatformFile, _settings: &ShareSettings) -> Result<(), DialogError> {
    let path = file
        .path()
        .ok_or_else(|| DialogError::PlatformError("handle has no filesystem path".into()))?;

    // Fire and forget; the activity view controller reports nothing back.
    ffi::share_file_bridge(&path.to_string_lossy());
    Ok(())
}
