use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use taskboard_domain::{ColumnId, Priority, PriorityFilter};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A single-board task tracker", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Path to the board data file (or set TASKBOARD_FILE env var)
    #[arg(value_name = "FILE", env = "TASKBOARD_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Board operations
    Board(BoardCommand),
    /// Task operations
    Task(TaskCommand),
    /// Subtask operations
    Subtask(SubtaskCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Create a fresh board file
    Init,
    /// Show the board, column by column
    Show(BoardShowArgs),
}

#[derive(Args)]
pub struct BoardShowArgs {
    /// Case-insensitive search over titles, descriptions, and tags
    #[arg(long)]
    pub search: Option<String>,
    /// Priority filter ("all" or a priority)
    #[arg(long)]
    pub priority: Option<PriorityFilter>,
}

// Task commands
#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a task in the backlog
    Create(TaskCreateArgs),
    /// List tasks, optionally filtered
    List(TaskListArgs),
    /// Get a specific task
    Get {
        #[arg(long)]
        id: Uuid,
    },
    /// Update task fields
    Update(TaskUpdateArgs),
    /// Delete a task
    Delete {
        #[arg(long)]
        id: Uuid,
    },
    /// Move a task within or across columns
    Move(TaskMoveArgs),
}

#[derive(Args)]
pub struct TaskCreateArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub priority: Option<Priority>,
    /// Due date as YYYY-MM-DD
    #[arg(long)]
    pub due_date: Option<NaiveDate>,
    /// Comma-separated tags
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

#[derive(Args)]
pub struct TaskListArgs {
    /// Case-insensitive search over titles, descriptions, and tags
    #[arg(long)]
    pub search: Option<String>,
    /// Priority filter ("all" or a priority)
    #[arg(long)]
    pub priority: Option<PriorityFilter>,
    /// Restrict to one column, in that column's display order
    #[arg(long)]
    pub column: Option<ColumnId>,
}

#[derive(Args)]
pub struct TaskUpdateArgs {
    #[arg(long)]
    pub id: Uuid,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub priority: Option<Priority>,
    /// Due date as YYYY-MM-DD
    #[arg(long, conflicts_with = "clear_due_date")]
    pub due_date: Option<NaiveDate>,
    /// Remove the due date
    #[arg(long)]
    pub clear_due_date: bool,
    /// Comma-separated tags (replaces the existing set)
    #[arg(long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,
}

#[derive(Args)]
pub struct TaskMoveArgs {
    #[arg(long)]
    pub id: Uuid,
    /// Column the task currently sits in
    #[arg(long)]
    pub from: ColumnId,
    /// Destination column
    #[arg(long)]
    pub to: ColumnId,
    /// Destination position within the column
    #[arg(long)]
    pub index: usize,
}

// Subtask commands
#[derive(Args)]
pub struct SubtaskCommand {
    #[command(subcommand)]
    pub action: SubtaskAction,
}

#[derive(Subcommand)]
pub enum SubtaskAction {
    /// Add a subtask to a task
    Add {
        #[arg(long)]
        task_id: Uuid,
        #[arg(long)]
        title: String,
    },
    /// Toggle a subtask's completed flag
    Toggle {
        #[arg(long)]
        task_id: Uuid,
        #[arg(long)]
        id: Uuid,
    },
    /// Remove a subtask from a task
    Remove {
        #[arg(long)]
        task_id: Uuid,
        #[arg(long)]
        id: Uuid,
    },
}
