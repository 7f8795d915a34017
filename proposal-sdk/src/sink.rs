use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ProposalError;

/// File name given to every generated proposal document
pub const OUTPUT_FILE_NAME: &str = "carbon-footprint-project.pdf";

/// Destination for a generated document
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Save `contents` under `file_name` and return where it ended up
    async fn save(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, ProposalError>;
}

/// Saves documents into a directory on the local file system.
///
/// Bytes go to a temporary file in the target directory first and are then
/// renamed into place, so a failed save never leaves a partial document.
#[derive(Debug, Clone)]
pub struct DiskSink {
    output_dir: PathBuf,
}

impl DiskSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl DocumentSink for DiskSink {
    async fn save(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, ProposalError> {
        let dir = self.output_dir.clone();
        let file_name = file_name.to_string();
        let contents = contents.to_vec();

        tokio::task::spawn_blocking(move || write_atomically(&dir, &file_name, &contents))
            .await
            .map_err(|e| ProposalError::unexpected(format!("Save task failed: {}", e)))?
    }
}

fn write_atomically(dir: &Path, file_name: &str, contents: &[u8]) -> Result<PathBuf, ProposalError> {
    std::fs::create_dir_all(dir)?;

    // Dropped (and deleted) on any early return below.
    let mut staged = tempfile::Builder::new()
        .prefix(".carbon-proposal-")
        .suffix(".part")
        .tempfile_in(dir)?;
    staged.write_all(contents)?;
    staged.as_file().sync_all()?;

    let target = dir.join(file_name);
    staged
        .persist(&target)
        .map_err(|e| ProposalError::Io { source: e.error })?;

    debug!("Wrote {} bytes to {}", contents.len(), target.display());
    Ok(target)
}
