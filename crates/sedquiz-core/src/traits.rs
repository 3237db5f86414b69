//! Core trait definitions for command executors.
//!
//! The game loop only knows about [`CommandExecutor`]; the shell-backed
//! implementation lives in the `sedquiz-runner` crate.

use async_trait::async_trait;

use crate::error::ExecutionError;

/// Runs a command line with a piece of text on its standard input.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Human-readable executor name (e.g. "sh").
    fn name(&self) -> &str;

    /// Run `command_line` with `input` on stdin.
    ///
    /// Returns stdout with trailing whitespace trimmed when the command exits
    /// successfully, or an [`ExecutionError`] otherwise.
    async fn run(&self, input: &str, command_line: &str) -> Result<String, ExecutionError>;
}
