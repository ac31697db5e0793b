use crate::{
    CameraPicker, DialogError, DirectoryPicker, FilePicker, FileSaver, PickerMode, PickerType,
    ShareSettings,
};
use futures::channel::oneshot;
use pickkit_file::PlatformFile;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

fn js_err(err: wasm_bindgen::JsValue) -> DialogError {
    DialogError::PlatformError(format!("{err:?}"))
}

fn accept_attribute(type_: &PickerType) -> Option<String> {
    match type_ {
        PickerType::Image => Some("image/*".into()),
        PickerType::Video => Some("video/*".into()),
        PickerType::ImageAndVideo => Some("image/*,video/*".into()),
        PickerType::File {
            extensions: Some(extensions),
        } if !extensions.is_empty() => Some(
            extensions
                .iter()
                .map(|extension| format!(".{extension}"))
                .collect::<Vec<_>>()
                .join(","),
        ),
        PickerType::File { .. } => None,
    }
}

/// Show a file picker through a hidden `<input type="file">` element.
///
/// The `change` event resolves with the selection, `cancel` resolves with
/// `None`; the element is removed from the document either way. File
/// inputs cannot cap a multiple selection, so the caller-side shaping does.
///
/// # Errors
/// Returns an error if no DOM document is available.
pub async fn pick_files(picker: FilePicker) -> Result<Option<Vec<PlatformFile>>, DialogError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| DialogError::PlatformError("no DOM document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| DialogError::PlatformError("no document body".into()))?;

    let input: web_sys::HtmlInputElement = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| DialogError::PlatformError("input element has unexpected type".into()))?;

    input.set_type("file");
    let _ = input.style().set_property("display", "none");
    if let Some(accept) = accept_attribute(&picker.type_) {
        input.set_accept(&accept);
    }
    input.set_multiple(matches!(picker.mode, PickerMode::Multiple { .. }));

    body.append_child(&input).map_err(js_err)?;

    let (tx, rx) = oneshot::channel::<Option<Vec<PlatformFile>>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onchange = {
        let tx = Rc::clone(&tx);
        let input = input.clone();
        Closure::<dyn FnMut()>::new(move || {
            let files = input.files().map(|list| {
                (0..list.length())
                    .filter_map(|index| list.get(index))
                    .map(PlatformFile::from_web_file)
                    .collect::<Vec<_>>()
            });
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(files);
            }
            input.remove();
        })
    };
    input.set_onchange(Some(onchange.as_ref().unchecked_ref()));

    let oncancel = {
        let tx = Rc::clone(&tx);
        let input = input.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(None);
            }
            input.remove();
        })
    };
    input.set_oncancel(Some(oncancel.as_ref().unchecked_ref()));

    input.click();

    let result = rx.await.map_err(|_| {
        DialogError::PlatformError("dialog callback dropped before resolving".into())
    })?;

    // The handlers must stay alive for the duration of the pending dialog;
    // dropping them here, after resolution, detaches them from the DOM.
    drop(onchange);
    drop(oncancel);

    Ok(result)
}

/// The browser has no save-location chooser.
///
/// # Errors
/// Always returns [`DialogError::NotSupported`].
pub async fn save_file(_saver: FileSaver) -> Result<Option<PlatformFile>, DialogError> {
    Err(DialogError::NotSupported(
        "file saver is not available in the browser".into(),
    ))
}

/// The browser has no directory chooser.
///
/// # Errors
/// Always returns [`DialogError::NotSupported`].
pub async fn pick_directory(
    _picker: DirectoryPicker,
) -> Result<Option<PlatformFile>, DialogError> {
    Err(DialogError::NotSupported(
        "directory picker is not available in the browser".into(),
    ))
}

/// The browser has no camera capture dialog.
///
/// # Errors
/// Always returns [`DialogError::NotSupported`].
pub async fn capture(_picker: CameraPicker) -> Result<Option<PlatformFile>, DialogError> {
    Err(DialogError::NotSupported(
        "camera capture is not available in the browser".into(),
    ))
}

/// The browser has no share surface for opaque file handles.
///
/// # Errors
/// Always returns [`DialogError::NotSupported`].
pub fn share(_file: &PlatformFile, _settings: &ShareSettings) -> Result<(), DialogError> {
    Err(DialogError::NotSupported(
        "sharing is not available in the browser".into(),
    ))
}
