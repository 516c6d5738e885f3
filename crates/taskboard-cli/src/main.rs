mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use taskboard_core::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(*shell, &mut cmd, "taskboard", &mut std::io::stdout());
        return Ok(());
    }

    let file_path = cli
        .file
        .or_else(|| {
            AppConfig::load()
                .default_board_file
                .map(|p| p.display().to_string())
        })
        .ok_or_else(|| {
            anyhow::anyhow!(
                "board file required: pass FILE, set TASKBOARD_FILE, or configure default_board_file"
            )
        })?;

    let mut ctx = match CliContext::load(&file_path).await {
        Ok(ctx) => ctx,
        Err(err) => output::output_failure(&err),
    };

    match cli.command {
        Commands::Board(board_cmd) => {
            handlers::board::handle(&mut ctx, board_cmd.action).await?;
        }
        Commands::Task(task_cmd) => {
            handlers::task::handle(&mut ctx, task_cmd.action).await?;
        }
        Commands::Subtask(subtask_cmd) => {
            handlers::subtask::handle(&mut ctx, subtask_cmd.action).await?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
