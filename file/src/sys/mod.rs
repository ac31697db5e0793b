#[cfg(not(any(target_os = "android", target_arch = "wasm32")))]
mod native;
#[cfg(not(any(target_os = "android", target_arch = "wasm32")))]
pub use native::FileInner;

#[cfg(target_os = "android")]
mod android;
#[cfg(target_os = "android")]
pub use android::FileInner;

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::FileInner;
