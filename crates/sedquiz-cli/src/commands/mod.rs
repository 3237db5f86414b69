pub mod list;
pub mod play;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use sedquiz_core::catalog::parse_catalog;
use sedquiz_core::model::Catalog;
use sedquiz_runner::config::{load_config_from, SedquizConfig};

/// Load the config, then the catalog it (or `--catalog`) points at.
pub fn load(
    catalog_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(SedquizConfig, Catalog)> {
    let config = load_config_from(config_path.as_deref())?;

    let catalog = match catalog_path.as_ref().or(config.catalog.as_ref()) {
        Some(path) => parse_catalog(path)?,
        None => Catalog::builtin()?,
    };
    tracing::debug!(catalog = %catalog.name, tasks = catalog.len(), "catalog loaded");

    Ok((config, catalog))
}
