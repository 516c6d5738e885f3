use crate::store::atomic_writer::AtomicWriter;
use crate::traits::BoardStore;
use std::path::{Path, PathBuf};
use taskboard_core::{BoardError, BoardResult};
use taskboard_domain::Board;

/// JSON file-backed board store.
///
/// The persisted form is the bare board document: the task list plus the
/// four column records with their ordered id lists, field names exactly as
/// the domain types serialize them. Saves replace the whole document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl BoardStore for JsonFileStore {
    async fn load(&self) -> BoardResult<Board> {
        let bytes = AtomicWriter::read_all(&self.path).await?;

        let board: Board = serde_json::from_slice(&bytes)
            .map_err(|e| BoardError::Decode(e.to_string()))?;

        tracing::info!("Loaded {} bytes from {}", bytes.len(), self.path.display());
        Ok(board)
    }

    async fn save(&self, board: &Board) -> BoardResult<()> {
        // Encoding a well-formed Board cannot fail in practice; the map_err
        // keeps the error taxonomy total.
        let bytes = serde_json::to_vec_pretty(board)
            .map_err(|e| BoardError::Decode(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &bytes).await?;

        tracing::info!("Saved {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
