//! sedquiz-runner — Shell-backed command execution.
//!
//! Runs player and reference commands through a real shell, feeding the
//! task's input on stdin, and loads the user configuration that controls it.

pub mod config;
pub mod shell;

use std::time::Duration;

use async_trait::async_trait;

use sedquiz_core::error::ExecutionError;
use sedquiz_core::traits::CommandExecutor;

use crate::config::SedquizConfig;

/// Executor that runs every command line in a fresh shell process.
pub struct ShellExecutor {
    /// Shell binary, invoked as `<shell> -c <command line>`.
    shell: String,
    /// Kill the command after this long.
    timeout: Option<Duration>,
}

impl ShellExecutor {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_config(config: &SedquizConfig) -> Self {
        Self::new(config.shell.clone()).with_timeout(config.timeout())
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::from_config(&SedquizConfig::default())
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    fn name(&self) -> &str {
        &self.shell
    }

    async fn run(&self, input: &str, command_line: &str) -> Result<String, ExecutionError> {
        shell::run_in_shell(&self.shell, input, command_line, self.timeout).await
    }
}
