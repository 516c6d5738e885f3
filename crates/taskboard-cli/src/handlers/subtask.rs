use crate::cli::SubtaskAction;
use crate::context::CliContext;
use crate::handlers::task::commit;
use crate::output;
use taskboard_core::BoardError;
use taskboard_domain::{Intent, Subtask, TaskChanges};

/// Subtask content edits (add/remove) are wholesale `subtasks` replacements
/// through the update operation; only the completed flag has a dedicated
/// engine operation.
pub async fn handle(ctx: &mut CliContext, action: SubtaskAction) -> anyhow::Result<()> {
    match action {
        SubtaskAction::Add { task_id, title } => {
            let task = match ctx.task(task_id) {
                Some(task) => task,
                None => output::output_failure(&BoardError::TaskNotFound(task_id)),
            };

            let mut subtasks = task.subtasks.clone();
            subtasks.push(Subtask::new(title));
            commit(
                ctx,
                Intent::UpdateTask {
                    task_id,
                    changes: TaskChanges {
                        subtasks: Some(subtasks),
                        ..Default::default()
                    },
                },
            )
            .await;

            let task = ctx
                .task(task_id)
                .ok_or_else(|| anyhow::anyhow!("Task not found after update: {}", task_id))?;
            output::output_success(task);
        }
        SubtaskAction::Toggle { task_id, id } => {
            commit(
                ctx,
                Intent::ToggleSubtask {
                    task_id,
                    subtask_id: id,
                },
            )
            .await;

            let task = ctx
                .task(task_id)
                .ok_or_else(|| anyhow::anyhow!("Task not found after toggle: {}", task_id))?;
            output::output_success(task);
        }
        SubtaskAction::Remove { task_id, id } => {
            let task = match ctx.task(task_id) {
                Some(task) => task,
                None => output::output_failure(&BoardError::TaskNotFound(task_id)),
            };
            if !task.subtasks.iter().any(|s| s.id == id) {
                output::output_failure(&BoardError::SubtaskNotFound(id));
            }

            let subtasks: Vec<_> = task
                .subtasks
                .iter()
                .filter(|s| s.id != id)
                .cloned()
                .collect();
            commit(
                ctx,
                Intent::UpdateTask {
                    task_id,
                    changes: TaskChanges {
                        subtasks: Some(subtasks),
                        ..Default::default()
                    },
                },
            )
            .await;

            let task = ctx
                .task(task_id)
                .ok_or_else(|| anyhow::anyhow!("Task not found after update: {}", task_id))?;
            output::output_success(task);
        }
    }
    Ok(())
}
