//! Shared build utilities for pickkit crates.
//!
//! This crate provides common functionality for:
//! - Apple: Swift bridge generation and Swift compilation
//! - Android: Kotlin → DEX compilation
//!
//! # Usage
//!
//! In your `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap();
//!
//!     if target_os == "ios" {
//!         pickkit_build::build_apple_bridge(&["src/sys/apple/mod.rs"]);
//!     }
//!
//!     if target_os == "android" {
//!         pickkit_build::build_kotlin(&["src/sys/android/Helper.kt"]);
//!     }
//! }
//! ```

#![warn(missing_docs)]

mod android;
mod apple;

pub use android::{AndroidConfig, build_kotlin, find_android_jar, find_d8_jar};
pub use apple::{AppleSwiftConfig, build_apple_bridge, compile_swift};
