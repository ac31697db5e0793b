//! Android platform build utilities.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Configuration for Kotlin → DEX compilation.
#[derive(Debug, Clone, Default)]
pub struct AndroidConfig {
    /// Preferred platform API level; the latest installed when `None`.
    pub api_level: Option<u32>,
}

fn sdk_root() -> Option<PathBuf> {
    env::var_os("ANDROID_HOME")
        .or_else(|| env::var_os("ANDROID_SDK_ROOT"))
        .map(PathBuf::from)
}

/// Sorted subdirectories of `dir`, newest (lexicographically last) first.
fn versioned_dirs(dir: &PathBuf) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|path| path.is_dir())
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs.reverse();
    dirs
}

/// Locate `android.jar` in the installed SDK.
#[must_use]
pub fn find_android_jar(config: &AndroidConfig) -> Option<PathBuf> {
    let platforms = sdk_root()?.join("platforms");

    if let Some(api_level) = config.api_level {
        let jar = platforms.join(format!("android-{api_level}")).join("android.jar");
        return jar.exists().then_some(jar);
    }

    versioned_dirs(&platforms)
        .into_iter()
        .map(|dir| dir.join("android.jar"))
        .find(|jar| jar.exists())
}

/// Locate `d8.jar` in the installed SDK build-tools.
#[must_use]
pub fn find_d8_jar() -> Option<PathBuf> {
    let build_tools = sdk_root()?.join("build-tools");
    versioned_dirs(&build_tools)
        .into_iter()
        .map(|dir| dir.join("lib").join("d8.jar"))
        .find(|jar| jar.exists())
}

/// Compile Kotlin helper sources to `OUT_DIR/classes.dex`.
///
/// Runs `kotlinc` against the platform `android.jar`, then `d8` over the
/// resulting class files. The produced DEX is what the dialog crates embed
/// via `include_bytes!`.
///
/// # Panics
/// Panics when the Android SDK, `kotlinc`, or `java` cannot be found, or
/// when either tool fails; these are build-environment errors.
pub fn build_kotlin(sources: &[&str]) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    for source in sources {
        println!("cargo:rerun-if-changed={source}");
    }

    let config = AndroidConfig::default();
    let android_jar = find_android_jar(&config)
        .expect("android.jar not found; set ANDROID_HOME or ANDROID_SDK_ROOT");

    let classes_dir = out_dir.join("classes");
    fs::create_dir_all(&classes_dir).expect("Failed to create classes dir");

    let status = Command::new("kotlinc")
        .arg("-classpath")
        .arg(&android_jar)
        .arg("-d")
        .arg(&classes_dir)
        .args(sources)
        .status()
        .expect("Failed to run kotlinc; is the Kotlin compiler installed?");
    assert!(status.success(), "kotlinc failed");

    let mut class_files = Vec::new();
    collect_class_files(&classes_dir, &mut class_files);
    assert!(!class_files.is_empty(), "kotlinc produced no class files");

    let d8_jar = find_d8_jar().expect("d8.jar not found in the SDK build-tools");
    let status = Command::new("java")
        .arg("-cp")
        .arg(&d8_jar)
        .arg("com.android.tools.r8.D8")
        .arg("--lib")
        .arg(&android_jar)
        .arg("--output")
        .arg(&out_dir)
        .args(&class_files)
        .status()
        .expect("Failed to run java for d8");
    assert!(status.success(), "d8 failed");

    assert!(
        out_dir.join("classes.dex").exists(),
        "d8 did not produce classes.dex"
    );
}

fn collect_class_files(dir: &PathBuf, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if path.is_dir() {
            collect_class_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "class") {
            out.push(path);
        }
    }
}
