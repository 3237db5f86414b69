//! sedquiz CLI — the interactive trainer front-end.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "sedquiz", version, about = "Interactive trainer for UNIX sed commands")]
struct Cli {
    /// Path to a .toml task catalog (defaults to the built-in one)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz (the default when no subcommand is given)
    Play,

    /// List the tasks in the catalog
    List,

    /// Check a catalog for problems
    Validate {
        /// Only check the catalog structure; do not execute reference solutions
        #[arg(long)]
        no_run: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => commands::play::execute(cli.catalog, cli.config).await,
        Commands::List => commands::list::execute(cli.catalog, cli.config),
        Commands::Validate { no_run } => {
            commands::validate::execute(cli.catalog, cli.config, no_run).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// `RUST_LOG` when set and parseable, otherwise `sedquiz=warn`.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("sedquiz=warn"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_warn() {
        assert_eq!(log_filter(None).to_string(), "sedquiz=warn");
        assert_eq!(log_filter(Some("")).to_string(), "sedquiz=warn");
    }

    #[test]
    fn rust_log_replaces_default() {
        let filter = log_filter(Some("debug")).to_string();
        assert!(filter.contains("debug"));
        assert!(!filter.contains("sedquiz=warn"));
    }
}
