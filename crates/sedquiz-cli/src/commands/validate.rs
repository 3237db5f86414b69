//! The `sedquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use sedquiz_core::catalog::{validate_catalog, ValidationWarning};
use sedquiz_core::model::{Catalog, Solution};
use sedquiz_core::traits::CommandExecutor;
use sedquiz_runner::ShellExecutor;

pub async fn execute(
    catalog_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    no_run: bool,
) -> Result<()> {
    let (config, catalog) = super::load(catalog_path, config_path)?;

    println!("Catalog: {} ({} tasks)", catalog.name, catalog.len());

    let mut warnings = validate_catalog(&catalog);
    if !no_run {
        let runner = ShellExecutor::from_config(&config);
        warnings.extend(run_solutions(&catalog, &runner).await);
    }

    for w in &warnings {
        let prefix = w
            .task_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}

/// Execute every reference alternative once and flag the ones that fail or
/// leave the input untouched.
async fn run_solutions(catalog: &Catalog, runner: &dyn CommandExecutor) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for task in catalog {
        for body in task.solution.alternatives() {
            let command_line = Solution::command_line(body);
            match runner.run(&task.input, &command_line).await {
                Ok(output) if output == task.input.trim_end() => {
                    warnings.push(ValidationWarning {
                        task_id: Some(task.id.clone()),
                        message: format!("`{command_line}` does not change the input"),
                    });
                }
                Ok(_) => {}
                Err(e) => {
                    warnings.push(ValidationWarning {
                        task_id: Some(task.id.clone()),
                        message: format!("`{command_line}` failed: {e}"),
                    });
                }
            }
        }
    }

    warnings
}
