//! Build script for pickkit-dialogs.

fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap();

    if target_os == "ios" {
        pickkit_build::build_apple_bridge(&["src/sys/apple/mod.rs"]);
    }

    if target_os == "android" {
        pickkit_build::build_kotlin(&["src/sys/android/PickerHelper.kt"]);
    }
}
