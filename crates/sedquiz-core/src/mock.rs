//! Scripted executor for testing the game loop without spawning processes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ExecutionError;
use crate::traits::CommandExecutor;

/// A fake executor that answers from a command-line → result table.
///
/// Unscripted command lines echo themselves back as output, so a user
/// command that is textually identical to `sed '<solution>'` always matches
/// the expected output.
pub struct ScriptedExecutor {
    /// Map of command line → stdout (Ok) or stderr (Err).
    responses: HashMap<String, Result<String, String>>,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Every `(input, command_line)` pair received, in order.
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedExecutor {
    /// Create a scripted executor with the given command-line responses.
    pub fn new(responses: HashMap<String, Result<String, String>>) -> Self {
        Self {
            responses,
            call_count: AtomicU32::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// An executor with no scripted responses; every command echoes itself.
    pub fn echoing() -> Self {
        Self::new(HashMap::new())
    }

    /// Add a successful response for `command_line`.
    pub fn with_output(mut self, command_line: &str, stdout: &str) -> Self {
        self.responses
            .insert(command_line.to_string(), Ok(stdout.to_string()));
        self
    }

    /// Add a failing response for `command_line`.
    pub fn with_error(mut self, command_line: &str, stderr: &str) -> Self {
        self.responses
            .insert(command_line.to_string(), Err(stderr.to_string()));
        self
    }

    /// Get the number of calls made to this executor.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get every command line this executor was asked to run.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(_, cmd)| cmd.clone())
            .collect()
    }
}

#[async_trait]
impl CommandExecutor for ScriptedExecutor {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn run(&self, input: &str, command_line: &str) -> Result<String, ExecutionError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((input.to_string(), command_line.to_string()));

        match self.responses.get(command_line) {
            Some(Ok(stdout)) => Ok(stdout.trim_end().to_string()),
            Some(Err(stderr)) => Err(ExecutionError::Failed {
                status: Some(1),
                stderr: stderr.clone(),
            }),
            None => Ok(command_line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_and_echoed_responses() {
        let exec = ScriptedExecutor::echoing()
            .with_output("sed 's/a/b/'", "b\n")
            .with_error("sed 's/a/b'", "unterminated `s' command");

        assert_eq!(exec.run("a", "sed 's/a/b/'").await.unwrap(), "b");
        assert!(exec.run("a", "sed 's/a/b'").await.is_err());
        assert_eq!(exec.run("a", "cat").await.unwrap(), "cat");
        assert_eq!(exec.call_count(), 3);
        assert_eq!(exec.command_lines()[2], "cat");
    }
}
