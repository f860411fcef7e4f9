//! The catalog store: owns the project collection and the gallery's
//! transient view state (filter, layout, selection).

use std::sync::Arc;

use log::info;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;

use vf_core::catalog::{
    filter_projects, CatalogStats, CategoryFilter, EmptyState, ProjectCardView, ProjectFilter,
    ViewMode,
};
use vf_core::ids::ProjectId;
use vf_core::project::{Category, NewProject, ProjectRecord};

use crate::ports::ClockPort;

/// Errors for catalog operations that reference a specific record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no project with id {0}")]
    UnknownProject(ProjectId),
}

/// Everything the gallery needs to render one frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySnapshot {
    /// Filtered cards in catalog order (most recent first).
    pub cards: Vec<ProjectCardView>,
    pub view_mode: ViewMode,
    /// Which empty-state message to show; absent when cards exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
    pub query: String,
    /// Active category selector; `None` means "all categories".
    pub category: Option<Category>,
}

/// In-memory, append-only project store.
///
/// All state is transient: the collection starts from the seed and is
/// discarded when the process exits.
pub struct CatalogService {
    clock: Arc<dyn ClockPort>,
    projects: RwLock<Vec<ProjectRecord>>,
    filter: RwLock<ProjectFilter>,
    view_mode: RwLock<ViewMode>,
    selected: RwLock<Option<ProjectId>>,
}

impl CatalogService {
    pub fn new(clock: Arc<dyn ClockPort>, seed: Vec<ProjectRecord>) -> Self {
        Self {
            clock,
            projects: RwLock::new(seed),
            filter: RwLock::new(ProjectFilter::default()),
            view_mode: RwLock::new(ViewMode::default()),
            selected: RwLock::new(None),
        }
    }

    /// Completes a validated submission and prepends it.
    ///
    /// Field content was already validated by the intake draft; the
    /// catalog only assigns `id` and `created_at`. Infallible.
    pub async fn add_project(&self, new_project: NewProject) -> ProjectRecord {
        let record = new_project.into_record(ProjectId::new(), self.clock.today());
        let mut projects = self.projects.write().await;
        projects.insert(0, record.clone());
        info!("added project {} ({} total)", record.id, projects.len());
        record
    }

    pub async fn set_query(&self, query: String) {
        self.filter.write().await.query = query;
    }

    pub async fn set_category(&self, category: Option<Category>) {
        self.filter.write().await.category = CategoryFilter::from(category);
    }

    pub async fn set_view_mode(&self, mode: ViewMode) {
        *self.view_mode.write().await = mode;
    }

    /// The filtered view plus the layout and empty-state messaging.
    pub async fn gallery(&self) -> GallerySnapshot {
        let projects = self.projects.read().await;
        let filter = self.filter.read().await;
        let cards: Vec<ProjectCardView> = filter_projects(&projects, &filter)
            .into_iter()
            .map(ProjectCardView::from_record)
            .collect();
        let empty_state = EmptyState::for_view(&filter, cards.len());
        GallerySnapshot {
            empty_state,
            view_mode: *self.view_mode.read().await,
            query: filter.query.clone(),
            category: filter.category.into(),
            cards,
        }
    }

    /// Statistics over the whole catalog, not the filtered view.
    pub async fn stats(&self) -> CatalogStats {
        CatalogStats::compute(&self.projects.read().await)
    }

    /// Marks a project as "currently viewed in detail".
    pub async fn select_project(&self, id: &ProjectId) -> Result<(), CatalogError> {
        {
            let projects = self.projects.read().await;
            if !projects.iter().any(|p| &p.id == id) {
                return Err(CatalogError::UnknownProject(id.clone()));
            }
        }
        *self.selected.write().await = Some(id.clone());
        Ok(())
    }

    pub async fn clear_selection(&self) {
        *self.selected.write().await = None;
    }

    /// Looks up a single record by id.
    pub async fn find(&self, id: &ProjectId) -> Option<ProjectRecord> {
        self.projects
            .read()
            .await
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    }

    /// The full record open in the detail/code viewer, if any.
    pub async fn selected(&self) -> Option<ProjectRecord> {
        let id = self.selected.read().await.clone()?;
        self.find(&id).await
    }

    /// Full records in catalog order.
    pub async fn projects(&self) -> Vec<ProjectRecord> {
        self.projects.read().await.clone()
    }
}
