//! Wires the services to their system adapters and runs the Tauri app.

use std::sync::Arc;

use anyhow::anyhow;
use log::info;

use vf_app::{CatalogService, ImageStager, IntakeService};
use vf_core::seed::sample_projects;

use crate::adapters::{SystemClipboard, SystemClock, TokioFileReader};
use crate::commands;
use crate::state::AppState;

/// Assembles the full service graph over the system adapters.
pub fn build_state() -> AppState {
    let catalog = Arc::new(CatalogService::new(
        Arc::new(SystemClock),
        sample_projects(),
    ));
    let stager = Arc::new(ImageStager::new(Arc::new(TokioFileReader)));
    let intake = Arc::new(IntakeService::new(catalog.clone(), stager));
    AppState {
        catalog,
        intake,
        clipboard: Arc::new(SystemClipboard),
    }
}

/// Runs the Tauri application.
///
/// The context comes from the caller because `tauri::generate_context!`
/// must expand where `tauri.conf.json` lives.
pub fn run(context: tauri::Context<tauri::Wry>) -> anyhow::Result<()> {
    tauri::Builder::default()
        .plugin(super::logging::get_builder().build())
        .plugin(tauri_plugin_opener::init())
        .manage(build_state())
        .setup(|_app| {
            info!("vizfolio started");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::catalog::get_gallery,
            commands::catalog::set_search_query,
            commands::catalog::set_category_filter,
            commands::catalog::set_view_mode,
            commands::catalog::get_catalog_stats,
            commands::catalog::list_categories,
            commands::selection::open_project,
            commands::selection::close_project,
            commands::selection::get_selected_project,
            commands::intake::open_intake_form,
            commands::intake::cancel_intake_form,
            commands::intake::get_intake_draft,
            commands::intake::set_intake_field,
            commands::intake::add_draft_technology,
            commands::intake::remove_draft_technology,
            commands::intake::set_draft_metric,
            commands::intake::stage_draft_image,
            commands::intake::clear_draft_image,
            commands::intake::submit_intake_form,
            commands::clipboard::copy_code_snippet,
            commands::clipboard::open_external_url,
        ])
        .run(context)
        .map_err(|e| anyhow!("failed to run tauri application: {e}"))
}
