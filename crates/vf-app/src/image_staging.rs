//! Single-slot image staging for the intake form.
//!
//! The user can pick a new file (or clear the draft) while a previous
//! read is still in flight. Each `stage` call takes a generation
//! ticket; only the holder of the latest ticket may publish its
//! result, so the slot always reflects the most recent choice.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use log::debug;
use thiserror::Error;

use crate::ports::FileReaderPort;

#[derive(Debug, Error)]
pub enum StagingError {
    #[error("{path} is not an image file")]
    NotAnImage { path: String },
    #[error("could not read {path}")]
    Unreadable {
        path: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("{path} is not a decodable image")]
    UndecodableImage { path: String },
}

/// What became of a staging attempt that completed without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagingOutcome {
    /// The encoded preview, as a `data:` URL ready for an `<img>` src.
    ///
    /// Still provisional: the caller must confirm the ticket with
    /// [`ImageStager::is_current`] at the moment it commits the URL,
    /// since a newer pick can start after this result is produced.
    Applied { data_url: String, ticket: u64 },
    /// A newer staging (or a clear) started while this one ran.
    Superseded,
}

/// Encodes picked image files into data URLs, last-start-wins.
pub struct ImageStager {
    reader: Arc<dyn FileReaderPort>,
    generation: AtomicU64,
}

impl ImageStager {
    pub fn new(reader: Arc<dyn FileReaderPort>) -> Self {
        Self {
            reader,
            generation: AtomicU64::new(0),
        }
    }

    /// Invalidates any in-flight staging without starting a new one.
    ///
    /// Called when the image slot is cleared or the form closes.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Whether `ticket` still holds the staging slot.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Reads and encodes `path` into a data URL preview.
    pub async fn stage(&self, path: &str) -> Result<StagingOutcome, StagingError> {
        // Reject by extension before invalidating the current slot, so
        // a stray non-image pick does not wipe an existing preview.
        declared_image_mime(path).ok_or_else(|| StagingError::NotAnImage {
            path: path.to_string(),
        })?;

        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let bytes = self
            .reader
            .read(path)
            .await
            .map_err(|source| StagingError::Unreadable {
                path: path.to_string(),
                source,
            })?;

        // Sniff the real format; the extension only gated entry.
        let format =
            image::guess_format(&bytes).map_err(|_| StagingError::UndecodableImage {
                path: path.to_string(),
            })?;

        if !self.is_current(ticket) {
            debug!("discarding superseded staging of {path}");
            return Ok(StagingOutcome::Superseded);
        }

        let data_url = format!(
            "data:{};base64,{}",
            format.to_mime_type(),
            BASE64.encode(&bytes)
        );
        Ok(StagingOutcome::Applied { data_url, ticket })
    }
}

/// MIME type implied by the file extension, for images we accept.
fn declared_image_mime(path: &str) -> Option<&'static str> {
    let ext = std::path::Path::new(path)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}
