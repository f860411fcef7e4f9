//! Shared state managed by the Tauri runtime.

use std::sync::Arc;

use vf_app::ports::ClipboardPort;
use vf_app::{CatalogService, IntakeService};

/// Everything the command layer needs, injected via `tauri::State`.
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub intake: Arc<IntakeService>,
    pub clipboard: Arc<dyn ClipboardPort>,
}
