#[cfg(not(any(target_os = "android", target_os = "ios", target_arch = "wasm32")))]
mod desktop;
#[cfg(not(any(target_os = "android", target_os = "ios", target_arch = "wasm32")))]
pub use desktop::{capture, pick_directory, pick_files, save_file, share};

#[cfg(target_os = "android")]
mod android;
#[cfg(target_os = "android")]
pub use android::{
    capture, capture_with_context, init_with_context, pick_directory,
    pick_directory_with_context, pick_files, pick_files_with_context, save_file,
    save_file_with_context, share, share_with_context,
};

#[cfg(target_os = "ios")]
mod apple;
#[cfg(target_os = "ios")]
pub use apple::{capture, pick_directory, pick_files, save_file, share};

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::{capture, pick_directory, pick_files, save_file, share};
