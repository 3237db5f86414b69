//! TOML task catalog loader.
//!
//! Loads catalogs from TOML files, validates them, and exposes the built-in
//! catalog that ships with the binary.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Catalog, Solution, Task};

/// The catalog played when no `--catalog` is given.
const BUILTIN_CATALOG: &str = include_str!("../catalog/sed-basics.toml");

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    tasks: Vec<TomlTask>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlTask {
    id: String,
    input: String,
    description: String,
    solution: Solution,
    #[serde(default)]
    guide: String,
}

impl Catalog {
    /// The catalog embedded in the binary.
    pub fn builtin() -> Result<Catalog> {
        parse_catalog_str(BUILTIN_CATALOG, Path::new("<builtin>"))
    }
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog`.
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    anyhow::ensure!(
        !parsed.tasks.is_empty(),
        "catalog has no tasks: {}",
        source_path.display()
    );

    let tasks = parsed
        .tasks
        .into_iter()
        .map(|t| {
            anyhow::ensure!(
                !t.solution.alternatives().is_empty(),
                "task '{}' has an empty solution list: {}",
                t.id,
                source_path.display()
            );
            Ok(Task {
                id: t.id,
                input: t.input,
                description: t.description,
                solution: t.solution,
                guide: t.guide,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Catalog {
        name: parsed.catalog.name,
        description: parsed.catalog.description,
        tasks,
    })
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The task ID (if applicable).
    pub task_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a catalog for problems that would make a task unplayable.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = HashSet::new();
    for task in catalog {
        if !seen_ids.insert(&task.id) {
            warnings.push(ValidationWarning {
                task_id: Some(task.id.clone()),
                message: format!("duplicate task ID: {}", task.id),
            });
        }
    }

    for task in catalog {
        let alternatives = task.solution.alternatives();
        if alternatives.is_empty() {
            warnings.push(ValidationWarning {
                task_id: Some(task.id.clone()),
                message: "solution list is empty".into(),
            });
        } else if alternatives.iter().any(|body| body.trim().is_empty()) {
            warnings.push(ValidationWarning {
                task_id: Some(task.id.clone()),
                message: "solution contains a blank entry".into(),
            });
        }
    }

    for task in catalog {
        if task.description.trim().is_empty() {
            warnings.push(ValidationWarning {
                task_id: Some(task.id.clone()),
                message: "description is empty".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[catalog]
name = "Test Catalog"
description = "A test catalog"

[[tasks]]
id = "swap"
input = "one\ntwo"
description = "Replace 'one' with '1'"
solution = 's/one/1/'
guide = "Use 's/old/new/'."

[[tasks]]
id = "digits"
input = "a1b2"
description = "Remove all digits"
solution = ['s/[0-9]//g', 's/[[:digit:]]//g']
"#;

    #[test]
    fn parse_valid_toml() {
        let catalog = parse_catalog_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(catalog.name, "Test Catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tasks[0].input, "one\ntwo");
        assert_eq!(catalog.tasks[1].solution.alternatives().len(), 2);
        assert!(catalog.tasks[1].guide.is_empty());
    }

    #[test]
    fn builtin_catalog_has_fourteen_tasks() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.tasks[0].input, "Hello World");
        assert_eq!(
            catalog.tasks[0].description,
            "Replace 'World' with 'UNIX'"
        );
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn builtin_catalog_keeps_backslashes() {
        let catalog = Catalog::builtin().unwrap();
        let join = catalog.iter().find(|t| t.id == "join-lines").unwrap();
        assert_eq!(
            join.solution.alternatives(),
            [r"N;s/line1\nline2/combined/".to_string()]
        );
        let digits = catalog.iter().find(|t| t.id == "remove-digits").unwrap();
        assert_eq!(digits.solution.alternatives()[1], r"s/\d//g");
    }

    #[test]
    fn join_lines_description_breaks_the_line() {
        let catalog = Catalog::builtin().unwrap();
        let join = catalog.iter().find(|t| t.id == "join-lines").unwrap();
        assert_eq!(join.description, "Replace 'line1\nline2' with 'combined'");
    }

    #[test]
    fn builtin_catalog_is_restartable() {
        let first: Vec<String> = Catalog::builtin()
            .unwrap()
            .iter()
            .map(|t| t.id.clone())
            .collect();
        let second: Vec<String> = Catalog::builtin()
            .unwrap()
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn reject_empty_catalog() {
        let toml = r#"
[catalog]
name = "Empty"
"#;
        let err = parse_catalog_str(toml, &PathBuf::from("empty.toml")).unwrap_err();
        assert!(err.to_string().contains("no tasks"));
    }

    #[test]
    fn validate_duplicate_ids_and_blank_solutions() {
        let toml = r#"
[catalog]
name = "Dupes"

[[tasks]]
id = "same"
input = "x"
description = "First"
solution = 's/x/y/'

[[tasks]]
id = "same"
input = "x"
description = "Second"
solution = 's/x/z/'

[[tasks]]
id = "blank"
input = "x"
description = ""
solution = ['s/x/y/', ' ']
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
        assert!(warnings.iter().any(|w| w.message.contains("blank entry")));
        assert!(warnings.iter().any(|w| w.message.contains("description is empty")));
    }

    #[test]
    fn reject_empty_solution_list() {
        let toml = r#"
[catalog]
name = "Unanswerable"

[[tasks]]
id = "nothing"
input = "x"
description = "No reference"
solution = []
"#;
        let err = parse_catalog_str(toml, &PathBuf::from("c.toml")).unwrap_err();
        assert!(err.to_string().contains("'nothing' has an empty solution list"));
    }

    #[test]
    fn validate_flags_empty_solution_list() {
        let catalog = Catalog {
            name: "built in code".into(),
            description: String::new(),
            tasks: vec![Task {
                id: "nothing".into(),
                input: "x".into(),
                description: "No reference".into(),
                solution: Solution::Alternatives(vec![]),
                guide: String::new(),
            }],
        };
        let warnings = validate_catalog(&catalog);
        assert!(warnings.iter().any(|w| w.message == "solution list is empty"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_catalog_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn parse_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, VALID_TOML).unwrap();

        let catalog = parse_catalog(&path).unwrap();
        assert_eq!(catalog.tasks[0].id, "swap");
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = parse_catalog(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/catalog.toml"));
    }
}
