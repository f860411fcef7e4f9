//! Add-project form commands.

use tauri::State;

use vf_core::project::{DraftField, MetricKind, ProjectDraft};

use super::dto::ProjectDetailDto;
use super::map_err;
use crate::state::AppState;

#[tauri::command]
pub async fn open_intake_form(state: State<'_, AppState>) -> Result<ProjectDraft, String> {
    Ok(state.intake.open().await)
}

#[tauri::command]
pub async fn cancel_intake_form(state: State<'_, AppState>) -> Result<(), String> {
    state.intake.cancel().await;
    Ok(())
}

#[tauri::command]
pub async fn get_intake_draft(
    state: State<'_, AppState>,
) -> Result<Option<ProjectDraft>, String> {
    Ok(state.intake.draft().await)
}

/// One channel for every text/select/toggle edit on the form.
#[tauri::command]
pub async fn set_intake_field(
    field: DraftField,
    state: State<'_, AppState>,
) -> Result<ProjectDraft, String> {
    state
        .intake
        .set_field(field)
        .await
        .map_err(|e| map_err(e.into()))
}

#[tauri::command]
pub async fn add_draft_technology(
    tag: String,
    state: State<'_, AppState>,
) -> Result<ProjectDraft, String> {
    state
        .intake
        .add_technology(tag)
        .await
        .map_err(|e| map_err(e.into()))
}

#[tauri::command]
pub async fn remove_draft_technology(
    tag: String,
    state: State<'_, AppState>,
) -> Result<ProjectDraft, String> {
    state
        .intake
        .remove_technology(tag)
        .await
        .map_err(|e| map_err(e.into()))
}

#[tauri::command]
pub async fn set_draft_metric(
    kind: MetricKind,
    value: i64,
    state: State<'_, AppState>,
) -> Result<ProjectDraft, String> {
    state
        .intake
        .set_metric(kind, value)
        .await
        .map_err(|e| map_err(e.into()))
}

/// Reads the picked file and stages its preview into the draft. If a
/// newer pick lands first, the returned draft simply keeps the newer
/// preview.
#[tauri::command]
pub async fn stage_draft_image(
    path: String,
    state: State<'_, AppState>,
) -> Result<ProjectDraft, String> {
    state
        .intake
        .stage_image(&path)
        .await
        .map_err(|e| map_err(e.into()))
}

#[tauri::command]
pub async fn clear_draft_image(state: State<'_, AppState>) -> Result<ProjectDraft, String> {
    state
        .intake
        .clear_image()
        .await
        .map_err(|e| map_err(e.into()))
}

/// Validates and submits the draft. On rejection the form stays open
/// and the error string names the missing field.
#[tauri::command]
pub async fn submit_intake_form(
    state: State<'_, AppState>,
) -> Result<ProjectDetailDto, String> {
    state
        .intake
        .submit()
        .await
        .map(Into::into)
        .map_err(|e| map_err(e.into()))
}
