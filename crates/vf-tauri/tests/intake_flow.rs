//! End-to-end intake flow over the real system adapters.

use std::io::Write;

use vf_core::project::{Category, DraftField};
use vf_tauri::bootstrap::build_state;

// PNG signature; format sniffing only inspects the header.
const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[tokio::test]
async fn picked_file_flows_into_a_submitted_project() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.png");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&PNG_MAGIC).unwrap();

    let state = build_state();
    let seeded = state.catalog.projects().await.len();

    state.intake.open().await;
    state
        .intake
        .set_field(DraftField::Title("Revenue Dashboard".to_string()))
        .await
        .unwrap();
    state
        .intake
        .set_field(DraftField::Description("Monthly revenue breakdown".to_string()))
        .await
        .unwrap();
    state
        .intake
        .set_field(DraftField::Category(Category::Dashboard))
        .await
        .unwrap();

    let draft = state
        .intake
        .stage_image(path.to_str().unwrap())
        .await
        .unwrap();
    assert!(draft
        .staged_image
        .as_deref()
        .unwrap()
        .starts_with("data:image/png;base64,"));

    let record = state.intake.submit().await.unwrap();
    assert_eq!(record.title, "Revenue Dashboard");

    let projects = state.catalog.projects().await;
    assert_eq!(projects.len(), seeded + 1);
    assert_eq!(projects[0].id, record.id);
}

#[tokio::test]
async fn missing_file_surfaces_a_read_error() {
    let state = build_state();
    state.intake.open().await;

    let err = state
        .intake
        .stage_image("/no/such/file.png")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("could not read"));
}
