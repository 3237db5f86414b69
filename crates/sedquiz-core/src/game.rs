//! The interactive quiz loop.
//!
//! [`Game::play`] walks the catalog in order, reading one command per line
//! from the player. Each task moves through
//! `Presenting → AwaitingCommand → Evaluating` until it is answered or
//! skipped; `exit` (or end of input) stops the session early.

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::ExecutionError;
use crate::model::{Catalog, Solution, Task};
use crate::traits::CommandExecutor;

/// Banner printed once when the game starts.
pub const WELCOME: &str = "
Welcome to the UNIX 'sed' Command Training Game!
-------------------------------------------------
You'll be given a text and a task to modify it using the 'sed' command.
Type the appropriate 'sed' command to complete each task.

Example:
Input text: \"Goodbye Moon\"
Task: Replace \"Moon\" with \"Stars\"
Your command: sed 's/Moon/Stars/'

Type 'exit' to quit the game at any time.
For each task, you'll also get a quick guide on how to use 'sed' for that type of modification.
Let's get started!
";

pub const PROMPT: &str = "Your 'sed' command (or type 'skip' to skip): ";

const REQUIRED_PREFIX: &str = "sed ";

/// Mutable state of one run through the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    /// Index of the task currently being played.
    pub task_index: usize,
    /// Number of tasks answered correctly so far.
    pub score: u32,
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every task was answered or skipped.
    Completed { score: u32, total: usize },
    /// The player typed `exit` (or closed stdin) at `task_index`.
    Exited { score: u32, task_index: usize },
}

/// Result of comparing a command's output against the expected output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// One line of player input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Exit,
    Skip,
    /// Does not start with `sed `.
    Malformed,
    Command(String),
}

impl Reply {
    pub fn parse(line: &str) -> Reply {
        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") {
            Reply::Exit
        } else if line.eq_ignore_ascii_case("skip") {
            Reply::Skip
        } else if line.starts_with(REQUIRED_PREFIX) {
            Reply::Command(line.to_string())
        } else {
            Reply::Malformed
        }
    }
}

#[derive(Debug)]
enum State {
    Presenting,
    AwaitingCommand,
    Evaluating(String),
    Finished(GameOutcome),
}

/// Plays a catalog against an executor.
pub struct Game<'a, E: ?Sized> {
    catalog: &'a Catalog,
    executor: &'a E,
}

impl<'a, E: CommandExecutor + ?Sized> Game<'a, E> {
    pub fn new(catalog: &'a Catalog, executor: &'a E) -> Self {
        Self { catalog, executor }
    }

    /// Run every reference alternative for `task` and collect the outputs.
    ///
    /// Alternatives that fail on this host are dropped; they can never match.
    pub async fn expected_outputs(&self, task: &Task) -> Vec<String> {
        let mut outputs = Vec::with_capacity(task.solution.alternatives().len());
        for body in task.solution.alternatives() {
            let command_line = Solution::command_line(body);
            match self.executor.run(&task.input, &command_line).await {
                Ok(output) => outputs.push(output),
                Err(e) => {
                    tracing::warn!(task = %task.id, solution = %body, "reference solution failed: {e}");
                }
            }
        }
        outputs
    }

    /// Run the player's command and compare it with the reference output.
    pub async fn judge(&self, task: &Task, command_line: &str) -> Result<Verdict, ExecutionError> {
        let output = self.executor.run(&task.input, command_line).await?;
        let expected = self.expected_outputs(task).await;

        if expected.iter().any(|e| *e == output) {
            Ok(Verdict::Correct)
        } else {
            tracing::debug!(task = %task.id, %output, ?expected, "output mismatch");
            Ok(Verdict::Incorrect)
        }
    }

    /// Play the whole catalog, reading commands from `input` and writing the
    /// transcript to `out`.
    pub async fn play<R, W>(&self, mut input: R, out: &mut W) -> Result<GameOutcome>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        write!(out, "{WELCOME}")?;

        let mut session = Session::default();
        let mut state = if self.catalog.is_empty() {
            State::Finished(GameOutcome::Completed { score: 0, total: 0 })
        } else {
            State::Presenting
        };
        let mut line = Vec::new();

        loop {
            state = match state {
                State::Presenting => {
                    let task = &self.catalog.tasks[session.task_index];
                    writeln!(out, "\nTask {}:", session.task_index + 1)?;
                    writeln!(out, "Input text: \"{}\"", task.input)?;
                    writeln!(out, "Task: {}", task.description)?;
                    writeln!(out, "Guide: {}", task.guide)?;
                    State::AwaitingCommand
                }
                State::AwaitingCommand => {
                    write!(out, "{PROMPT}")?;
                    out.flush()?;

                    line.clear();
                    // Undecodable bytes become U+FFFD and fail the prefix check.
                    let reply = if input.read_until(b'\n', &mut line).await? == 0 {
                        writeln!(out)?;
                        Reply::Exit
                    } else {
                        Reply::parse(&String::from_utf8_lossy(&line))
                    };

                    let task = &self.catalog.tasks[session.task_index];
                    match reply {
                        Reply::Exit => {
                            writeln!(out, "Thanks for playing! Goodbye!")?;
                            State::Finished(GameOutcome::Exited {
                                score: session.score,
                                task_index: session.task_index,
                            })
                        }
                        Reply::Skip => {
                            match &task.solution {
                                Solution::Single(_) => {
                                    writeln!(out, "The correct command was: {}", task.solution)?
                                }
                                Solution::Alternatives(_) => {
                                    writeln!(out, "The correct commands were: {}", task.solution)?
                                }
                            }
                            self.advance(&mut session)
                        }
                        Reply::Malformed => {
                            writeln!(out, "Please start your command with 'sed'. Try again.")?;
                            State::AwaitingCommand
                        }
                        Reply::Command(command) => State::Evaluating(command),
                    }
                }
                State::Evaluating(command) => {
                    let task = &self.catalog.tasks[session.task_index];
                    match self.judge(task, &command).await {
                        Ok(Verdict::Correct) => {
                            writeln!(out, "Correct! Well done.")?;
                            session.score += 1;
                            self.advance(&mut session)
                        }
                        Ok(Verdict::Incorrect) => {
                            writeln!(out, "Incorrect. Try again.")?;
                            State::AwaitingCommand
                        }
                        Err(e) => {
                            writeln!(out, "Error: {e}")?;
                            State::AwaitingCommand
                        }
                    }
                }
                State::Finished(outcome) => {
                    if let GameOutcome::Completed { score, total } = outcome {
                        writeln!(out, "\nYour final score: {score}/{total}")?;
                        writeln!(out, "Thanks for playing! Keep practicing your 'sed' skills!")?;
                    }
                    out.flush()?;
                    return Ok(outcome);
                }
            };
        }
    }

    fn advance(&self, session: &mut Session) -> State {
        session.task_index += 1;
        if session.task_index >= self.catalog.len() {
            State::Finished(GameOutcome::Completed {
                score: session.score,
                total: self.catalog.len(),
            })
        } else {
            State::Presenting
        }
    }
}
