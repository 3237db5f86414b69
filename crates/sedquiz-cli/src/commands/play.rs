//! The `sedquiz play` command.

use std::path::PathBuf;

use anyhow::Result;
use tokio::io::BufReader;

use sedquiz_core::game::{Game, GameOutcome};
use sedquiz_runner::ShellExecutor;

pub async fn execute(catalog_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (config, catalog) = super::load(catalog_path, config_path)?;
    let runner = ShellExecutor::from_config(&config);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    let outcome = Game::new(&catalog, &runner).play(stdin, &mut stdout).await?;
    match outcome {
        GameOutcome::Completed { score, total } => {
            tracing::info!(score, total, "game completed");
        }
        GameOutcome::Exited { score, task_index } => {
            tracing::info!(score, task = task_index + 1, "game exited early");
        }
    }

    Ok(())
}
