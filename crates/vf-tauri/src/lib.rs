//! # vf-tauri
//!
//! Tauri adapter layer for Vizfolio: the command surface the webview
//! invokes, the system adapters behind the application ports, and the
//! bootstrap that wires everything together.

pub mod adapters;
pub mod bootstrap;
pub mod commands;
pub mod state;

pub use state::AppState;
