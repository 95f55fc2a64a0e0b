pub mod command;
pub mod config;
pub mod convert;
pub mod form;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
