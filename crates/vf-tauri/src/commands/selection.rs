//! Detail-view selection commands.

use tauri::State;

use vf_core::ids::ProjectId;

use super::dto::ProjectDetailDto;
use super::map_err;
use crate::state::AppState;

#[tauri::command]
pub async fn open_project(id: String, state: State<'_, AppState>) -> Result<(), String> {
    state
        .catalog
        .select_project(&ProjectId::from(id))
        .await
        .map_err(|e| map_err(e.into()))
}

#[tauri::command]
pub async fn close_project(state: State<'_, AppState>) -> Result<(), String> {
    state.catalog.clear_selection().await;
    Ok(())
}

/// The record open in the detail modal, or `null` when none is.
#[tauri::command]
pub async fn get_selected_project(
    state: State<'_, AppState>,
) -> Result<Option<ProjectDetailDto>, String> {
    Ok(state.catalog.selected().await.map(Into::into))
}
