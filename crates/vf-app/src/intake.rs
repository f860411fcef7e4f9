//! The intake flow: one draft at a time, edits always accepted,
//! validation only at submission.

use std::sync::Arc;

use log::{info, warn};
use thiserror::Error;
use tokio::sync::Mutex;

use vf_core::project::{DraftError, DraftField, MetricKind, ProjectDraft, ProjectRecord};

use crate::catalog::CatalogService;
use crate::image_staging::{ImageStager, StagingError, StagingOutcome};

#[derive(Debug, Error)]
pub enum IntakeError {
    /// An edit or submission arrived while no form was open.
    #[error("the intake form is not open")]
    FormClosed,
    #[error(transparent)]
    Invalid(#[from] DraftError),
    #[error(transparent)]
    Staging(#[from] StagingError),
}

/// Drives the add-project form over a single optional draft slot.
pub struct IntakeService {
    catalog: Arc<CatalogService>,
    stager: Arc<ImageStager>,
    draft: Mutex<Option<ProjectDraft>>,
}

impl IntakeService {
    pub fn new(catalog: Arc<CatalogService>, stager: Arc<ImageStager>) -> Self {
        Self {
            catalog,
            stager,
            draft: Mutex::new(None),
        }
    }

    /// Opens the form with a fresh draft, discarding any previous one.
    pub async fn open(&self) -> ProjectDraft {
        let draft = ProjectDraft::new();
        *self.draft.lock().await = Some(draft.clone());
        draft
    }

    /// Closes the form and throws the draft away.
    pub async fn cancel(&self) {
        self.stager.invalidate();
        *self.draft.lock().await = None;
    }

    /// The current draft, if the form is open.
    pub async fn draft(&self) -> Option<ProjectDraft> {
        self.draft.lock().await.clone()
    }

    pub async fn set_field(&self, field: DraftField) -> Result<ProjectDraft, IntakeError> {
        self.with_draft(|draft| draft.apply(field)).await
    }

    /// Adds a tag; duplicates and blank input are ignored.
    pub async fn add_technology(&self, tag: String) -> Result<ProjectDraft, IntakeError> {
        self.with_draft(|draft| {
            draft.add_technology(&tag);
        })
        .await
    }

    pub async fn remove_technology(&self, tag: String) -> Result<ProjectDraft, IntakeError> {
        self.with_draft(|draft| {
            draft.remove_technology(&tag);
        })
        .await
    }

    pub async fn set_metric(
        &self,
        kind: MetricKind,
        value: i64,
    ) -> Result<ProjectDraft, IntakeError> {
        self.with_draft(|draft| draft.set_metric(kind, value)).await
    }

    /// Stages a picked image file into the draft's preview slot.
    ///
    /// The file read runs without holding the draft lock, so edits stay
    /// responsive during a slow read. A result that lost the race (a
    /// newer pick, a clear, or the form closing) is discarded.
    pub async fn stage_image(&self, path: &str) -> Result<ProjectDraft, IntakeError> {
        if self.draft.lock().await.is_none() {
            return Err(IntakeError::FormClosed);
        }

        match self.stager.stage(path).await? {
            StagingOutcome::Applied { data_url, ticket } => {
                let mut guard = self.draft.lock().await;
                let draft = guard.as_mut().ok_or(IntakeError::FormClosed)?;
                // Confirm the ticket under the draft lock: a newer pick
                // or a clear can start after the stager produced this
                // result but before we got here.
                if self.stager.is_current(ticket) {
                    draft.stage_image(data_url);
                }
                Ok(draft.clone())
            }
            StagingOutcome::Superseded => self.draft().await.ok_or(IntakeError::FormClosed),
        }
    }

    /// Clears the image slot and invalidates any in-flight staging.
    pub async fn clear_image(&self) -> Result<ProjectDraft, IntakeError> {
        self.stager.invalidate();
        self.with_draft(|draft| draft.clear_image()).await
    }

    /// Validates and submits the draft to the catalog.
    ///
    /// On rejection the draft stays open and unchanged so the user can
    /// fix the missing field. On success the form closes.
    pub async fn submit(&self) -> Result<ProjectRecord, IntakeError> {
        let mut guard = self.draft.lock().await;
        let draft = guard.as_ref().ok_or(IntakeError::FormClosed)?;

        let new_project = match draft.finish() {
            Ok(new_project) => new_project,
            Err(err) => {
                warn!("intake submission rejected: {err}");
                return Err(err.into());
            }
        };

        let record = self.catalog.add_project(new_project).await;
        *guard = None;
        info!("intake submitted project {}", record.id);
        Ok(record)
    }

    async fn with_draft<F>(&self, edit: F) -> Result<ProjectDraft, IntakeError>
    where
        F: FnOnce(&mut ProjectDraft),
    {
        let mut guard = self.draft.lock().await;
        let draft = guard.as_mut().ok_or(IntakeError::FormClosed)?;
        edit(draft);
        Ok(draft.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ClockPort, FileReaderPort, MockClockPort, MockFileReaderPort};
    use chrono::NaiveDate;
    use vf_core::project::Category;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn catalog() -> Arc<CatalogService> {
        let mut clock = MockClockPort::new();
        clock
            .expect_today()
            .return_const(NaiveDate::from_ymd_opt(2026, 8, 23).unwrap());
        Arc::new(CatalogService::new(Arc::new(clock) as Arc<dyn ClockPort>, vec![]))
    }

    fn png_stager() -> Arc<ImageStager> {
        let mut reader = MockFileReaderPort::new();
        reader
            .expect_read()
            .returning(|_| Ok(PNG_MAGIC.to_vec()));
        Arc::new(ImageStager::new(
            Arc::new(reader) as Arc<dyn FileReaderPort>
        ))
    }

    fn intake() -> (Arc<CatalogService>, IntakeService) {
        let catalog = catalog();
        let service = IntakeService::new(catalog.clone(), png_stager());
        (catalog, service)
    }

    #[tokio::test]
    async fn edits_require_an_open_form() {
        let (_, service) = intake();
        let err = service
            .set_field(DraftField::Title("X".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, IntakeError::FormClosed));
    }

    #[tokio::test]
    async fn open_starts_from_a_fresh_draft() {
        let (_, service) = intake();
        service.open().await;
        service
            .set_field(DraftField::Title("Left over".to_string()))
            .await
            .unwrap();

        let draft = service.open().await;
        assert_eq!(draft, ProjectDraft::new());
    }

    #[tokio::test]
    async fn cancel_discards_the_draft() {
        let (_, service) = intake();
        service.open().await;
        service.cancel().await;
        assert!(service.draft().await.is_none());
    }

    #[tokio::test]
    async fn rejected_submission_keeps_the_draft_open() {
        let (catalog, service) = intake();
        service.open().await;
        service
            .set_field(DraftField::Title("Chart".to_string()))
            .await
            .unwrap();

        let err = service.submit().await.unwrap_err();
        assert!(matches!(
            err,
            IntakeError::Invalid(DraftError::MissingDescription)
        ));
        assert!(service.draft().await.is_some());
        assert!(catalog.projects().await.is_empty());
    }

    #[tokio::test]
    async fn full_flow_submits_and_closes() {
        let (catalog, service) = intake();
        service.open().await;
        service
            .set_field(DraftField::Title("Sales Dashboard".to_string()))
            .await
            .unwrap();
        service
            .set_field(DraftField::Description("Quarterly KPIs".to_string()))
            .await
            .unwrap();
        service
            .set_field(DraftField::Category(Category::Analytics))
            .await
            .unwrap();
        service.add_technology("Plotly".to_string()).await.unwrap();

        let draft = service.stage_image("/tmp/chart.png").await.unwrap();
        assert!(draft
            .staged_image
            .as_deref()
            .unwrap()
            .starts_with("data:image/png;base64,"));

        let record = service.submit().await.unwrap();
        assert_eq!(record.title, "Sales Dashboard");
        assert_eq!(record.category, Category::Analytics);
        assert_eq!(record.technologies, vec!["Plotly"]);
        assert_eq!(
            record.created_at,
            NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
        );

        assert!(service.draft().await.is_none());
        assert_eq!(catalog.projects().await[0].id, record.id);
    }

    #[tokio::test]
    async fn older_pick_never_overwrites_a_newer_one() {
        use tokio::sync::Semaphore;

        const GIF_MAGIC: &[u8] = b"GIF89a";

        struct GatedReader(Arc<Semaphore>);

        #[async_trait::async_trait]
        impl crate::ports::FileReaderPort for GatedReader {
            async fn read(&self, path: &str) -> anyhow::Result<Vec<u8>> {
                if path.contains("slow") {
                    let permit = self.0.acquire().await?;
                    permit.forget();
                    return Ok(PNG_MAGIC.to_vec());
                }
                Ok(GIF_MAGIC.to_vec())
            }
        }

        let gate = Arc::new(Semaphore::new(0));
        let stager = Arc::new(ImageStager::new(Arc::new(GatedReader(gate.clone()))));
        let service = Arc::new(IntakeService::new(catalog(), stager));
        service.open().await;

        let slow = {
            let service = service.clone();
            tokio::spawn(async move { service.stage_image("/tmp/slow.png").await })
        };
        tokio::task::yield_now().await;

        let draft = service.stage_image("/tmp/fast.gif").await.unwrap();
        assert!(draft
            .staged_image
            .as_deref()
            .unwrap()
            .starts_with("data:image/gif;base64,"));

        gate.add_permits(1);
        let draft = slow.await.unwrap().unwrap();

        // Both the late return and the stored draft keep the newer pick.
        assert!(draft
            .staged_image
            .as_deref()
            .unwrap()
            .starts_with("data:image/gif;base64,"));
        let stored = service.draft().await.unwrap();
        assert!(stored
            .staged_image
            .as_deref()
            .unwrap()
            .starts_with("data:image/gif;base64,"));
    }

    #[tokio::test]
    async fn cleared_image_stays_cleared_after_a_late_staging() {
        use tokio::sync::Semaphore;

        struct GatedReader(Arc<Semaphore>);

        #[async_trait::async_trait]
        impl crate::ports::FileReaderPort for GatedReader {
            async fn read(&self, _path: &str) -> anyhow::Result<Vec<u8>> {
                let permit = self.0.acquire().await?;
                permit.forget();
                Ok(PNG_MAGIC.to_vec())
            }
        }

        let gate = Arc::new(Semaphore::new(0));
        let stager = Arc::new(ImageStager::new(Arc::new(GatedReader(gate.clone()))));
        let service = Arc::new(IntakeService::new(catalog(), stager));
        service.open().await;

        let slow = {
            let service = service.clone();
            tokio::spawn(async move { service.stage_image("/tmp/slow.png").await })
        };
        tokio::task::yield_now().await;

        service.clear_image().await.unwrap();
        gate.add_permits(1);

        let draft = slow.await.unwrap().unwrap();
        assert!(draft.staged_image.is_none());
        assert!(service.draft().await.unwrap().staged_image.is_none());
    }

    #[tokio::test]
    async fn clear_image_empties_the_slot() {
        let (_, service) = intake();
        service.open().await;
        service.stage_image("/tmp/chart.png").await.unwrap();
        let draft = service.clear_image().await.unwrap();
        assert!(draft.staged_image.is_none());
    }

    #[tokio::test]
    async fn staging_errors_pass_through() {
        let mut reader = MockFileReaderPort::new();
        reader.expect_read().never();
        let service = IntakeService::new(
            catalog(),
            Arc::new(ImageStager::new(
                Arc::new(reader) as Arc<dyn FileReaderPort>
            )),
        );

        service.open().await;
        let err = service.stage_image("/tmp/notes.txt").await.unwrap_err();
        assert!(matches!(
            err,
            IntakeError::Staging(StagingError::NotAnImage { .. })
        ));
        // The failed pick leaves the slot untouched.
        assert!(service.draft().await.unwrap().staged_image.is_none());
    }
}
