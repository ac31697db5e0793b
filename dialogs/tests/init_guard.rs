//! Initialization ordering across every dialog entry point.
//!
//! Lives in its own binary so the process-wide ready flag starts unset
//! and flips exactly once, under this test's control.

#![cfg(not(any(target_os = "android", target_arch = "wasm32")))]

use pickkit_dialogs::{
    CameraPicker, DialogError, DirectoryPicker, FilePicker, FileSaver, PickerMode, PlatformFile,
    ShareSettings, share_file,
};

#[tokio::test]
async fn dialogs_fail_synchronously_until_initialized() {
    let err = FilePicker::new().pick().await.unwrap_err();
    assert!(matches!(err, DialogError::NotInitialized));

    let err = FilePicker::new().pick_one().await.unwrap_err();
    assert!(matches!(err, DialogError::NotInitialized));

    let err = FileSaver::new("report")
        .with_extension("pdf")
        .save()
        .await
        .unwrap_err();
    assert!(matches!(err, DialogError::NotInitialized));

    let err = DirectoryPicker::new().pick().await.unwrap_err();
    assert!(matches!(err, DialogError::NotInitialized));

    let err = CameraPicker::new().capture().await.unwrap_err();
    assert!(matches!(err, DialogError::NotInitialized));

    let file = PlatformFile::from_path("/tmp/shared.txt");
    let err = share_file(&file, &ShareSettings::default()).unwrap_err();
    assert!(matches!(err, DialogError::NotInitialized));

    // Mode validation precedes the readiness check.
    let err = FilePicker::new()
        .with_mode(PickerMode::Multiple { max_items: Some(0) })
        .pick()
        .await
        .unwrap_err();
    assert!(matches!(err, DialogError::InvalidMode(_)));

    pickkit_dialogs::init();
    pickkit_dialogs::init();

    // Desktop has no capture dialog, so this resolves without showing UI.
    #[cfg(not(target_os = "ios"))]
    {
        let err = CameraPicker::new().capture().await.unwrap_err();
        assert!(matches!(err, DialogError::NotSupported(_)));
    }
}
