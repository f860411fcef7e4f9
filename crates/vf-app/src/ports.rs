//! Ports: the service layer's view of the outside world.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Source of the current date, injectable for tests.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    /// Today's date, used for `created_at` stamps.
    fn today(&self) -> NaiveDate;
}

/// Reads a user-chosen file (picker or drag-and-drop) into memory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileReaderPort: Send + Sync {
    async fn read(&self, path: &str) -> Result<Vec<u8>>;
}

/// Writes text to the system clipboard.
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardPort: Send + Sync {
    fn set_text(&self, text: &str) -> Result<()>;
}
