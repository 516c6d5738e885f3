use crate::cli::{TaskAction, TaskCreateArgs, TaskListArgs, TaskUpdateArgs};
use crate::context::CliContext;
use crate::output;
use taskboard_core::BoardError;
use taskboard_domain::{
    filter_tasks, FieldUpdate, Intent, PriorityFilter, Task, TaskChanges, TaskDraft,
};

pub async fn handle(ctx: &mut CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Create(args) => {
            let draft = build_draft(args);
            commit(ctx, Intent::CreateTask { draft }).await;

            // create appends to the backlog tail
            let task = ctx
                .board()
                .tasks
                .last()
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("Task creation succeeded but task not found"))?;
            output::output_success(&task);
        }
        TaskAction::List(args) => {
            let tasks = list_tasks(ctx, &args);
            output::output_list(tasks);
        }
        TaskAction::Get { id } => match ctx.task(id) {
            Some(task) => output::output_success(task),
            None => output::output_failure(&BoardError::TaskNotFound(id)),
        },
        TaskAction::Update(args) => {
            let id = args.id;
            let changes = build_changes(args);
            if changes.is_empty() {
                output::output_error("no_changes", "No fields to update");
            }
            commit(
                ctx,
                Intent::UpdateTask {
                    task_id: id,
                    changes,
                },
            )
            .await;
            let task = ctx
                .task(id)
                .ok_or_else(|| anyhow::anyhow!("Task not found after update: {}", id))?;
            output::output_success(task);
        }
        TaskAction::Delete { id } => {
            commit(ctx, Intent::DeleteTask { task_id: id }).await;
            output::output_success(serde_json::json!({"deleted": id.to_string()}));
        }
        TaskAction::Move(args) => {
            commit(
                ctx,
                Intent::MoveTask {
                    task_id: args.id,
                    source: args.from,
                    dest: args.to,
                    dest_index: args.index,
                },
            )
            .await;
            let task = ctx
                .task(args.id)
                .ok_or_else(|| anyhow::anyhow!("Task not found after move: {}", args.id))?;
            output::output_success(task);
        }
    }
    Ok(())
}

/// Apply and persist one intent, rendering any failure as the error
/// envelope.
pub(crate) async fn commit(ctx: &mut CliContext, intent: Intent) {
    if let Err(err) = ctx.commit(intent).await {
        output::output_failure(&err);
    }
}

fn build_draft(args: TaskCreateArgs) -> TaskDraft {
    let mut draft = TaskDraft::default();
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(description) = args.description {
        draft.description = description;
    }
    if let Some(priority) = args.priority {
        draft.priority = priority;
    }
    draft.due_date = args.due_date;
    draft.tags = args.tags;
    draft
}

fn build_changes(args: TaskUpdateArgs) -> TaskChanges {
    let due_date = if args.clear_due_date {
        FieldUpdate::Clear
    } else if let Some(date) = args.due_date {
        FieldUpdate::Set(date)
    } else {
        FieldUpdate::NoChange
    };

    TaskChanges {
        title: args.title,
        description: args.description,
        priority: args.priority,
        due_date,
        tags: args.tags,
        subtasks: None,
    }
}

fn list_tasks(ctx: &CliContext, args: &TaskListArgs) -> Vec<Task> {
    let search = args.search.as_deref().unwrap_or("");
    let priority = args.priority.unwrap_or(PriorityFilter::All);
    let visible = filter_tasks(&ctx.board().tasks, search, priority);

    match args.column {
        // re-project through the column ordering for the display order
        Some(column) => ctx
            .board()
            .columns
            .get(column)
            .task_ids
            .iter()
            .filter_map(|id| visible.iter().find(|t| t.id == *id))
            .map(|t| (*t).clone())
            .collect(),
        None => visible.into_iter().cloned().collect(),
    }
}
