use std::path::Path;
use taskboard_core::BoardResult;
use tokio::fs;

/// Atomic file writer for whole-snapshot replacement.
/// Uses the write-to-temp-file → rename pattern so a crash mid-write never
/// leaves a truncated document behind.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write `data` to `path` atomically.
    pub async fn write_atomic(path: &Path, data: &[u8]) -> BoardResult<()> {
        // Temp file lives in the target directory so the rename stays on
        // one filesystem (rename is only atomic within a filesystem).
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.path().to_path_buf();

        tokio::fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, path).await?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read the whole file at `path`.
    pub async fn read_all(path: &Path) -> BoardResult<Vec<u8>> {
        let data = fs::read(path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}
