use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContext};
use vf_app::ports::ClipboardPort;

/// System clipboard writer using clipboard-rs.
///
/// A fresh context per call keeps the adapter `Send + Sync` without a
/// mutex around platform clipboard handles.
pub struct SystemClipboard;

impl ClipboardPort for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("failed to create clipboard context: {}", e))?;
        context
            .set_text(text.to_string())
            .map_err(|e| anyhow!("failed to write clipboard: {}", e))
    }
}
