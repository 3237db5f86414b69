//! Subprocess plumbing for running a command line under a shell.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use sedquiz_core::error::ExecutionError;

/// Run `command_line` via `<shell> -c`, writing `input` and a trailing
/// newline to its stdin.
///
/// On success returns stdout with trailing whitespace removed. A non-zero
/// exit yields [`ExecutionError::Failed`] carrying trimmed stderr.
pub async fn run_in_shell(
    shell: &str,
    input: &str,
    command_line: &str,
    timeout: Option<Duration>,
) -> Result<String, ExecutionError> {
    let start = Instant::now();

    let mut cmd = Command::new(shell);
    cmd.arg("-c")
        .arg(command_line)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    tracing::debug!(%shell, %command_line, "spawning");
    let mut child = cmd
        .spawn()
        .map_err(|e| ExecutionError::Spawn(e.to_string()))?;

    let stdin = child.stdin.take();
    let payload = format!("{input}\n");
    let feed = async move {
        if let Some(mut stdin) = stdin {
            // The command may exit without reading stdin; a broken pipe is fine.
            if let Err(e) = stdin.write_all(payload.as_bytes()).await {
                tracing::debug!("stdin write stopped early: {e}");
            }
        }
    };
    let collect = async {
        let ((), output) = tokio::join!(feed, child.wait_with_output());
        output
    };

    let output = match timeout {
        Some(limit) => match tokio::time::timeout(limit, collect).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(%command_line, "command timed out after {}s", limit.as_secs());
                return Err(ExecutionError::TimedOut(limit.as_secs()));
            }
        },
        None => collect.await,
    }
    .map_err(|e| ExecutionError::Io(e.to_string()))?;

    let duration_ms = start.elapsed().as_millis() as u64;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::debug!(status = ?output.status.code(), duration_ms, "command failed");
        return Err(ExecutionError::Failed {
            status: output.status.code(),
            stderr,
        });
    }

    tracing::debug!(duration_ms, "command finished");
    Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}
