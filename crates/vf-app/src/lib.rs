//! # vf-app
//!
//! Vizfolio application layer: the catalog store service, the intake
//! (form) service, and the single-slot image staging task, all built
//! over injected ports so adapters and tests can swap the outside world.

pub mod catalog;
pub mod image_staging;
pub mod intake;
pub mod ports;

pub use catalog::{CatalogError, CatalogService, GallerySnapshot};
pub use image_staging::{ImageStager, StagingError, StagingOutcome};
pub use intake::{IntakeError, IntakeService};
