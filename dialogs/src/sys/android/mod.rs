use crate::{
    CameraPicker, CameraType, DialogError, DirectoryPicker, FilePicker, FileSaver, PickerMode,
    PickerType, ShareSettings,
};
use jni::JNIEnv;
use jni::objects::{GlobalRef, JObject, JObjectArray, JString, JValue};
use pickkit_file::PlatformFile;
use std::sync::OnceLock;

/// Embedded DEX bytecode containing the PickerHelper class.
static DEX_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/classes.dex"));

/// Cached class loader for the embedded helper.
static CLASS_LOADER: OnceLock<GlobalRef> = OnceLock::new();

fn jni_err(err: jni::errors::Error) -> DialogError {
    DialogError::PlatformError(format!("JNI error: {err}"))
}

/// Load the embedded helper and mark the dialog environment as ready.
///
/// Must be called once with a valid activity context before any dialog;
/// calling it again is a no-op.
///
/// # Errors
/// Returns an error if the DEX cannot be written to the app cache dir or
/// the class loader cannot be constructed.
pub fn init_with_context(env: &mut JNIEnv, context: &JObject) -> Result<(), DialogError> {
    if CLASS_LOADER.get().is_some() {
        crate::mark_initialized();
        return Ok(());
    }

    let cache_dir = env
        .call_method(context, "getCacheDir", "()Ljava/io/File;", &[])
        .and_then(jni::objects::JValueOwned::l)
        .map_err(jni_err)?;

    let cache_path = env
        .call_method(&cache_dir, "getAbsolutePath", "()Ljava/lang/String;", &[])
        .and_then(jni::objects::JValueOwned::l)
        .map_err(jni_err)?;

    let dex_path = format!(
        "{}/pickkit_dialogs.dex",
        env.get_string((&cache_path).into())
            .map_err(jni_err)?
            .to_str()
            .map_err(|err| DialogError::PlatformError(format!("invalid cache path: {err}")))?
    );

    std::fs::write(&dex_path, DEX_BYTES)?;

    let dex_path_jstring = env.new_string(&dex_path).map_err(jni_err)?;

    let parent_loader = env
        .call_method(context, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])
        .and_then(jni::objects::JValueOwned::l)
        .map_err(jni_err)?;

    let dex_class_loader_class = env
        .find_class("dalvik/system/DexClassLoader")
        .map_err(jni_err)?;

    let class_loader = env
        .new_object(
            dex_class_loader_class,
            "(Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;Ljava/lang/ClassLoader;)V",
            &[
                JValue::Object(&dex_path_jstring),
                JValue::Object(&cache_path),
                JValue::Object(&JObject::null()),
                JValue::Object(&parent_loader),
            ],
        )
        .map_err(jni_err)?;

    let global_ref = env.new_global_ref(class_loader).map_err(jni_err)?;

    let _ = CLASS_LOADER.set(global_ref);
    crate::mark_initialized();
    Ok(())
}

fn helper_class<'a>(env: &mut JNIEnv<'a>) -> Result<jni::objects::JClass<'a>, DialogError> {
    let class_loader = CLASS_LOADER
        .get()
        .ok_or(DialogError::NotInitialized)?;

    let helper_class_name = env
        .new_string("pickkit.dialogs.PickerHelper")
        .map_err(jni_err)?;

    let helper_class = env
        .call_method(
            class_loader.as_obj(),
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&helper_class_name)],
        )
        .and_then(jni::objects::JValueOwned::l)
        .map_err(jni_err)?;

    Ok(helper_class.into())
}

fn read_string(env: &mut JNIEnv, object: &JObject) -> Result<String, DialogError> {
    let jstring: &JString = object.into();
    Ok(env.get_string(jstring).map_err(jni_err)?.into())
}

/// Show a file picker. The helper drives the visual-media picker for media
/// types and the document picker otherwise, keyed by a fresh UUID per call.
///
/// # Errors
/// Returns an error if the helper class cannot be reached or a JNI call
/// fails.
pub fn pick_files_with_context(
    env: &mut JNIEnv,
    context: &JObject,
    picker: &FilePicker,
) -> Result<Option<Vec<PlatformFile>>, DialogError> {
    picker.mode.validate()?;
    let helper = helper_class(env)?;

    let type_code = match picker.type_ {
        PickerType::Image => 0,
        PickerType::Video => 1,
        PickerType::ImageAndVideo => 2,
        PickerType::File { .. } => 3,
    };

    let extensions = match &picker.type_ {
        PickerType::File {
            extensions: Some(extensions),
        } => extensions.as_slice(),
        _ => &[],
    };
    let extension_array: JObjectArray = {
        let array = env
            .new_object_array(
                i32::try_from(extensions.len())
                    .map_err(|_| DialogError::PlatformError("extension list too long".into()))?,
                "java/lang/String",
                JObject::null(),
            )
            .map_err(jni_err)?;
        for (index, extension) in extensions.iter().enumerate() {
            let element = env.new_string(extension).map_err(jni_err)?;
            env.set_object_array_element(&array, index as i32, element)
                .map_err(jni_err)?;
        }
        array
    };

    let (multiple, max_items) = match picker.mode {
        PickerMode::Single => (false, 1),
        // Zero tells the visual-media picker "unbounded".
        PickerMode::Multiple { max_items } => (
            true,
            max_items
                .map(|cap| i32::try_from(cap).unwrap_or(i32::MAX))
                .unwrap_or(0),
        ),
    };

    let result = env
        .call_static_method(
            helper,
            "pickFiles",
            "(Landroid/content/Context;I[Ljava/lang/String;ZI)[Ljava/lang/String;",
            &[
                JValue::Object(context),
                JValue::Int(type_code),
                JValue::Object(&extension_array),
                JValue::Bool(multiple.into()),
                JValue::Int(max_items),
            ],
        )
        .and_then(jni::objects::JValueOwned::l)
        .map_err(jni_err)?;

    if result.is_null() {
        return Ok(None);
    }

    let uris = JObjectArray::from(result);
    let count = env.get_array_length(&uris).map_err(jni_err)?;
    let mut files = Vec::with_capacity(count as usize);
    for index in 0..count {
        let element = env.get_object_array_element(&uris, index).map_err(jni_err)?;
        files.push(PlatformFile::from_uri(read_string(env, &element)?));
    }

    Ok(Some(picker.mode.shape(files)))
}

/// Show a save-location chooser backed by the `CreateDocument` contract.
///
/// # Errors
/// Returns an error if the helper class cannot be reached or a JNI call
/// fails.
pub fn save_file_with_context(
    env: &mut JNIEnv,
    context: &JObject,
    saver: &FileSaver,
) -> Result<Option<PlatformFile>, DialogError> {
    let helper = helper_class(env)?;

    let file_name = env.new_string(saver.file_name()).map_err(jni_err)?;
    let extension = match &saver.extension {
        Some(extension) => env.new_string(extension).map_err(jni_err)?.into(),
        None => JObject::null(),
    };

    let result = env
        .call_static_method(
            helper,
            "saveFile",
            "(Landroid/content/Context;Ljava/lang/String;Ljava/lang/String;)Ljava/lang/String;",
            &[
                JValue::Object(context),
                JValue::Object(&file_name),
                JValue::Object(&extension),
            ],
        )
        .and_then(jni::objects::JValueOwned::l)
        .map_err(jni_err)?;

    if result.is_null() {
        Ok(None)
    } else {
        Ok(Some(PlatformFile::from_uri(read_string(env, &result)?)))
    }
}

/// Show a chooser restricted to directories (`OpenDocumentTree`).
///
/// # Errors
/// Returns an error if the helper class cannot be reached or a JNI call
/// fails.
pub fn pick_directory_with_context(
    env: &mut JNIEnv,
    context: &JObject,
    picker: &DirectoryPicker,
) -> Result<Option<PlatformFile>, DialogError> {
    let helper = helper_class(env)?;

    let initial = match &picker.directory {
        Some(directory) => env
            .new_string(directory.to_string_lossy())
            .map_err(jni_err)?
            .into(),
        None => JObject::null(),
    };

    let result = env
        .call_static_method(
            helper,
            "pickDirectory",
            "(Landroid/content/Context;Ljava/lang/String;)Ljava/lang/String;",
            &[JValue::Object(context), JValue::Object(&initial)],
        )
        .and_then(jni::objects::JValueOwned::l)
        .map_err(jni_err)?;

    if result.is_null() {
        Ok(None)
    } else {
        Ok(Some(PlatformFile::from_uri(read_string(env, &result)?)))
    }
}

/// Launch the camera capture UI. The helper writes the captured media into
/// the app cache dir and returns its path, or null when capture was
/// aborted or the output failed to persist.
///
/// # Errors
/// Returns an error if the helper class cannot be reached or a JNI call
/// fails.
pub fn capture_with_context(
    env: &mut JNIEnv,
    context: &JObject,
    picker: &CameraPicker,
) -> Result<Option<PlatformFile>, DialogError> {
    let helper = helper_class(env)?;

    let capture_code = match picker.type_ {
        CameraType::Photo => 0,
        CameraType::Video => 1,
    };

    let result = env
        .call_static_method(
            helper,
            "capture",
            "(Landroid/content/Context;I)Ljava/lang/String;",
            &[JValue::Object(context), JValue::Int(capture_code)],
        )
        .and_then(jni::objects::JValueOwned::l)
        .map_err(jni_err)?;

    if result.is_null() {
        log::warn!("camera capture resolved without a file");
        Ok(None)
    } else {
        Ok(Some(PlatformFile::from_path(read_string(env, &result)?)))
    }
}

/// Hand the file to an `ACTION_SEND` chooser. Fire-and-forget.
///
/// # Errors
/// Returns an error if the helper class cannot be reached or a JNI call
/// fails.
pub fn share_with_context(
    env: &mut JNIEnv,
    context: &JObject,
    file: &PlatformFile,
    settings: &ShareSettings,
) -> Result<(), DialogError> {
    let helper = helper_class(env)?;

    let target = file
        .uri()
        .map(ToOwned::to_owned)
        .or_else(|| file.path().map(|path| path.to_string_lossy().into_owned()))
        .ok_or_else(|| DialogError::PlatformError("handle has no URI or path".into()))?;
    let target = env.new_string(target).map_err(jni_err)?;

    let extension = match file.extension() {
        Some(extension) => env.new_string(extension).map_err(jni_err)?.into(),
        None => JObject::null(),
    };
    let authority = match &settings.authority {
        Some(authority) => env.new_string(authority).map_err(jni_err)?.into(),
        None => JObject::null(),
    };

    env.call_static_method(
        helper,
        "shareFile",
        "(Landroid/content/Context;Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;)V",
        &[
            JValue::Object(context),
            JValue::Object(&target),
            JValue::Object(&extension),
            JValue::Object(&authority),
        ],
    )
    .map_err(jni_err)?;

    Ok(())
}

// The plain entry points need a JNIEnv and Context on Android; they direct
// callers to the _with_context variants.

fn needs_context(operation: &str) -> DialogError {
    DialogError::PlatformError(format!(
        "Android: use {operation}_with_context() with a JNIEnv and Context"
    ))
}

pub async fn pick_files(_picker: FilePicker) -> Result<Option<Vec<PlatformFile>>, DialogError> {
    Err(needs_context("pick_files"))
}

pub async fn save_file(_saver: FileSaver) -> Result<Option<PlatformFile>, DialogError> {
    Err(needs_context("save_file"))
}

pub async fn pick_directory(
    _picker: DirectoryPicker,
) -> Result<Option<PlatformFile>, DialogError> {
    Err(needs_context("pick_directory"))
}

pub async fn capture(_picker: CameraPicker) -> Result<Option<PlatformFile>, DialogError> {
    Err(needs_context("capture"))
}

pub fn share(_file: &PlatformFile, _settings: &ShareSettings) -> Result<(), DialogError> {
    Err(needs_context("share"))
}
