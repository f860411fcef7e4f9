//! Clipboard and external-link commands for the detail views.

use anyhow::anyhow;
use tauri::State;

use vf_core::ids::ProjectId;

use super::map_err;
use crate::state::AppState;

/// Copies a project's code snippet to the system clipboard.
#[tauri::command]
pub async fn copy_code_snippet(id: String, state: State<'_, AppState>) -> Result<(), String> {
    let id = ProjectId::from(id);
    let snippet = state
        .catalog
        .find(&id)
        .await
        .ok_or_else(|| map_err(anyhow!("no project with id {id}")))?
        .code_snippet
        .ok_or_else(|| map_err(anyhow!("project {id} has no code snippet")))?;
    state.clipboard.set_text(&snippet).map_err(map_err)
}

/// Opens a project's GitHub or live URL in the default browser.
#[tauri::command]
pub async fn open_external_url(url: String) -> Result<(), String> {
    tauri_plugin_opener::open_url(url, None::<&str>).map_err(|e| map_err(e.into()))
}
