//! Tauri command surface.
//!
//! Commands are thin: deserialize arguments, call into the services,
//! map errors to strings for the webview.

pub mod catalog;
pub mod clipboard;
pub mod dto;
pub mod error;
pub mod intake;
pub mod selection;

pub use error::map_err;
