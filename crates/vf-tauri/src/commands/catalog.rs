//! Gallery commands: filtering, layout, and header statistics.

use tauri::State;

use vf_app::GallerySnapshot;
use vf_core::catalog::ViewMode;
use vf_core::project::Category;

use super::dto::{category_options, CategoryDto, StatsDto};
use crate::state::AppState;

/// The filtered gallery view as the frontend should render it.
#[tauri::command]
pub async fn get_gallery(state: State<'_, AppState>) -> Result<GallerySnapshot, String> {
    Ok(state.catalog.gallery().await)
}

#[tauri::command]
pub async fn set_search_query(
    query: String,
    state: State<'_, AppState>,
) -> Result<GallerySnapshot, String> {
    state.catalog.set_query(query).await;
    Ok(state.catalog.gallery().await)
}

/// `category: null` resets the selector to "all categories".
#[tauri::command]
pub async fn set_category_filter(
    category: Option<Category>,
    state: State<'_, AppState>,
) -> Result<GallerySnapshot, String> {
    state.catalog.set_category(category).await;
    Ok(state.catalog.gallery().await)
}

#[tauri::command]
pub async fn set_view_mode(
    mode: ViewMode,
    state: State<'_, AppState>,
) -> Result<GallerySnapshot, String> {
    state.catalog.set_view_mode(mode).await;
    Ok(state.catalog.gallery().await)
}

#[tauri::command]
pub async fn get_catalog_stats(state: State<'_, AppState>) -> Result<StatsDto, String> {
    Ok(state.catalog.stats().await.into())
}

#[tauri::command]
pub async fn list_categories() -> Result<Vec<CategoryDto>, String> {
    Ok(category_options())
}
