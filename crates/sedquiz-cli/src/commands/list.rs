//! The `sedquiz list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn execute(catalog_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (_, catalog) = super::load(catalog_path, config_path)?;

    println!("Catalog: {} ({} tasks)", catalog.name, catalog.len());

    let mut table = Table::new();
    table.set_header(vec!["#", "ID", "Task", "Solutions"]);
    for (i, task) in catalog.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&task.id),
            Cell::new(&task.description),
            Cell::new(task.solution.alternatives().len()),
        ]);
    }

    println!("{table}");
    Ok(())
}
