//! Command execution error types.
//!
//! Every way a command can fail to produce output is folded into
//! [`ExecutionError`]. The game loop prints these to the user and re-prompts,
//! so the `Display` text is what the player sees after `Error: `.

use thiserror::Error;

/// Errors that can occur when running a command line through the shell.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The command ran but exited non-zero. Displays stderr verbatim.
    #[error("{stderr}")]
    Failed { status: Option<i32>, stderr: String },

    /// The shell could not be started.
    #[error("failed to spawn shell: {0}")]
    Spawn(String),

    /// The command did not finish in time and was killed.
    #[error("command timed out after {0}s")]
    TimedOut(u64),

    /// Reading the child's output failed.
    #[error("I/O error while running command: {0}")]
    Io(String),
}

impl ExecutionError {
    /// Returns `true` if the command itself ran and reported failure, as
    /// opposed to the shell never getting a chance to run it.
    pub fn is_command_failure(&self) -> bool {
        matches!(self, ExecutionError::Failed { .. })
    }

    /// The exit status of a failed command, if known.
    pub fn status(&self) -> Option<i32> {
        match self {
            ExecutionError::Failed { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_displays_stderr_verbatim() {
        let err = ExecutionError::Failed {
            status: Some(1),
            stderr: "sed: -e expression #1, char 5: unterminated `s' command".into(),
        };
        assert_eq!(
            err.to_string(),
            "sed: -e expression #1, char 5: unterminated `s' command"
        );
        assert!(err.is_command_failure());
        assert_eq!(err.status(), Some(1));
    }

    #[test]
    fn spawn_is_not_command_failure() {
        let err = ExecutionError::Spawn("No such file or directory".into());
        assert!(!err.is_command_failure());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("failed to spawn"));
    }
}
