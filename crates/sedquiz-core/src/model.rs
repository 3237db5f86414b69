//! Core data model types for sedquiz.
//!
//! A [`Catalog`] is an ordered list of [`Task`]s. Each task carries the text
//! the user's command is run against and one or more reference solutions
//! that define the expected output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single quiz item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Short identifier, unique within a catalog.
    pub id: String,
    /// Text fed to the command on standard input.
    pub input: String,
    /// What the user is asked to do.
    pub description: String,
    /// Reference command body (or bodies) used to compute the expected output.
    pub solution: Solution,
    /// Hint shown before the first attempt.
    #[serde(default)]
    pub guide: String,
}

/// The reference `sed` script(s) for a task.
///
/// In TOML this is either a string or an array of strings. Any alternative
/// whose output matches the user's output counts as a correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Solution {
    Single(String),
    Alternatives(Vec<String>),
}

impl Solution {
    /// All acceptable command bodies, in declaration order.
    pub fn alternatives(&self) -> &[String] {
        match self {
            Solution::Single(body) => std::slice::from_ref(body),
            Solution::Alternatives(bodies) => bodies,
        }
    }

    /// The full shell command line for a command body.
    pub fn command_line(body: &str) -> String {
        format!("sed '{body}'")
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self
            .alternatives()
            .iter()
            .map(|body| Solution::command_line(body))
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&shown)
    }
}

/// An ordered, read-only collection of tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Human-readable name.
    pub name: String,
    /// Description of this catalog.
    #[serde(default)]
    pub description: String,
    /// The tasks, in presentation order.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
