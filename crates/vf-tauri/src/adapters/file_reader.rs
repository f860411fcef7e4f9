use anyhow::{Context, Result};
use async_trait::async_trait;
use vf_app::ports::FileReaderPort;

/// File reader backed by tokio's async filesystem API.
pub struct TokioFileReader;

#[async_trait]
impl FileReaderPort for TokioFileReader {
    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {path}"))
    }
}
