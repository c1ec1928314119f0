pub mod constants;
pub mod core;
pub mod overlay;

// Browser front-end; the modules above are target-independent.
#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;

#[cfg(target_arch = "wasm32")]
pub use app::{start, EspViewer};
