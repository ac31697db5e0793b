//! # Pickkit
//!
//! A unified, coroutine-style API for the platform-native file dialogs:
//! file picker, file saver, directory picker, camera capture, and the
//! system share sheet, across desktop, Android, iOS, and the web.
//!
//! Every operation adapts the platform's asynchronous dialog primitive
//! (rfd panels, ActivityResult contracts, view-controller delegates, DOM
//! input elements) into a single `async` call resolving to a typed result.
//! Cancellation is always `Ok(None)`, never an error.
//!
//! ## Features
//!
//! Pickkit is modular; enable only what you need:
//!
//! - `file`: the [`file::PlatformFile`] handle and transient storage lookup.
//! - `dialogs`: the five dialog operations.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! pickkit = { version = "0.1", features = ["dialogs"] }
//! ```
//!
//! ```rust,ignore
//! use pickkit::dialogs::{self, FilePicker, PickerType};
//!
//! async fn choose_image() {
//!     dialogs::init();
//!     if let Ok(Some(file)) = FilePicker::new()
//!         .with_type(PickerType::Image)
//!         .pick_one()
//!         .await
//!     {
//!         println!("picked {}", file.name());
//!     }
//! }
//! ```

#[cfg(feature = "dialogs")]
pub use pickkit_dialogs as dialogs;

#[cfg(feature = "file")]
pub use pickkit_file as file;
