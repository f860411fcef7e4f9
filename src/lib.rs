//! Vizfolio shell crate.
//!
//! Holds `tauri.conf.json` and the generated context; everything else
//! lives in the workspace crates.

use log::error;

pub fn run() {
    if let Err(e) = vf_tauri::bootstrap::run(tauri::generate_context!()) {
        error!("vizfolio exited with error: {e:#}");
        std::process::exit(1);
    }
}
