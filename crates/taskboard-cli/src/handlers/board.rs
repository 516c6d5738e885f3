use crate::cli::{BoardAction, BoardShowArgs};
use crate::context::CliContext;
use crate::output;
use serde::Serialize;
use taskboard_domain::{filter_tasks, ColumnId, PriorityFilter, Task};

#[derive(Serialize)]
struct ColumnView<'a> {
    id: ColumnId,
    title: &'a str,
    tasks: Vec<&'a Task>,
}

pub async fn handle(ctx: &mut CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::Init => {
            // CliContext::load already bootstrapped the file if it was
            // missing; init just reports the (possibly fresh) board.
            output::output_success(ctx.board());
        }
        BoardAction::Show(args) => {
            let views = column_views(ctx, &args);
            output::output_list(views);
        }
    }
    Ok(())
}

/// Filtered tasks re-projected through the per-column orderings, so each
/// column renders in its user-visible order.
fn column_views<'a>(ctx: &'a CliContext, args: &BoardShowArgs) -> Vec<ColumnView<'a>> {
    let search = args.search.as_deref().unwrap_or("");
    let priority = args.priority.unwrap_or(PriorityFilter::All);
    let visible = filter_tasks(&ctx.board().tasks, search, priority);

    ctx.board()
        .columns
        .iter()
        .map(|column| ColumnView {
            id: column.id,
            title: &column.title,
            tasks: column
                .task_ids
                .iter()
                .filter_map(|id| visible.iter().find(|t| t.id == *id).copied())
                .collect(),
        })
        .collect()
}
