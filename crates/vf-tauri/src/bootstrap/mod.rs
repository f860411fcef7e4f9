//! Application bootstrap: logging setup and Tauri wiring.

pub mod logging;
pub mod run;

pub use run::{build_state, run};
