use async_trait::async_trait;
use std::path::Path;
use taskboard_core::BoardResult;
use taskboard_domain::Board;

/// Whole-snapshot storage for the board document.
///
/// The gateway offers replace semantics only: each save writes the entire
/// board, each load parses the entire board, and there is no partial write
/// or lock-based concurrency control. Callers must not adopt a new
/// in-memory board as canonical until `save` has succeeded.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Load the persisted board snapshot.
    async fn load(&self) -> BoardResult<Board>;

    /// Replace the persisted snapshot with `board`.
    async fn save(&self, board: &Board) -> BoardResult<()>;

    /// Check if the store file exists.
    async fn exists(&self) -> bool;

    /// Get the path to the store file.
    fn path(&self) -> &Path;
}
