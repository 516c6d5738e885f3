use chrono::Utc;
use taskboard_core::BoardResult;
use taskboard_domain::{engine, Board, Intent, Task, TaskId};
use taskboard_persistence::{BoardStore, JsonFileStore};

/// Owns the loaded board and the store backing it.
///
/// Each mutation goes board-in/board-out through the engine, is persisted,
/// and only then adopted: after a failed save the in-memory board still
/// holds the last successfully persisted snapshot.
pub struct CliContext<S: BoardStore = JsonFileStore> {
    board: Board,
    store: S,
}

impl CliContext<JsonFileStore> {
    pub async fn load(file_path: &str) -> BoardResult<Self> {
        let store = JsonFileStore::new(file_path);

        if !store.exists().await {
            // first run: persist a fresh board, then load it back like any
            // other snapshot
            store.save(&Board::new()).await?;
            tracing::info!("Created new board file: {}", file_path);
        }

        let board = store.load().await?;
        Ok(Self { board, store })
    }
}

impl<S: BoardStore> CliContext<S> {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.board.task(id)
    }

    /// Apply one intent and persist the result.
    pub async fn commit(&mut self, intent: Intent) -> BoardResult<()> {
        let next = engine::apply(&self.board, intent, Utc::now())?;
        self.store.save(&next).await?;
        self.board = next;
        Ok(())
    }
}
