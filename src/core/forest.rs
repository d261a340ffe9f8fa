//! Task forest loading and flattening

use std::collections::HashMap;
use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use super::types::{Task, TaskId};
use crate::error::{JsonParseError, TaskGraphError};

/// The ordered list of top-level tasks supplied for one compilation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForest {
    roots: Vec<Task>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ForestDocument {
    Bare(Vec<Task>),
    Wrapped { tasks: Vec<Task> },
}

impl TaskForest {
    pub fn new(roots: Vec<Task>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[Task] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Parse a forest from JSON text; `name` labels the source in diagnostics
    pub fn from_json_str(name: &str, content: &str) -> Result<Self, TaskGraphError> {
        serde_json::from_str::<ForestDocument>(content)
            .map(|doc| match doc {
                ForestDocument::Bare(roots) | ForestDocument::Wrapped { tasks: roots } => {
                    Self::new(roots)
                }
            })
            .map_err(|e| {
                let span = byte_offset(content, e.line(), e.column())
                    .map(|offset| SourceSpan::new(offset.into(), 1));

                TaskGraphError::JsonParseError(Box::new(JsonParseError {
                    file: name.to_string(),
                    source_code: NamedSource::new(name, content.to_string()),
                    span,
                    source: e,
                }))
            })
    }

    pub fn from_file(path: &Path) -> Result<Self, TaskGraphError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TaskGraphError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::from_json_str(&path.display().to_string(), &content)
    }

    /// Flatten the forest in declaration order (pre-order, parents first)
    pub fn flatten(&self) -> Result<FlatForest<'_>, TaskGraphError> {
        let mut flat = FlatForest {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for root in &self.roots {
            flat.push(root, None, 0)?;
        }

        Ok(flat)
    }
}

impl From<Vec<Task>> for TaskForest {
    fn from(roots: Vec<Task>) -> Self {
        Self::new(roots)
    }
}

/// A task together with its position in the hierarchy
#[derive(Debug, Clone, Copy)]
pub struct FlatTask<'a> {
    pub task: &'a Task,
    /// Flat index of the direct parent, `None` for root tasks
    pub parent: Option<usize>,
    /// Nesting distance from the top-level ancestor
    pub nesting: usize,
    /// Position among siblings
    pub sibling_index: usize,
}

impl FlatTask<'_> {
    pub fn is_child(&self) -> bool {
        self.parent.is_some()
    }
}

/// Pre-order view over every task and subtask of a forest
#[derive(Debug)]
pub struct FlatForest<'a> {
    entries: Vec<FlatTask<'a>>,
    index: HashMap<&'a TaskId, usize>,
}

impl<'a> FlatForest<'a> {
    fn push(
        &mut self,
        task: &'a Task,
        parent: Option<usize>,
        sibling_index: usize,
    ) -> Result<(), TaskGraphError> {
        let position = self.entries.len();
        if self.index.insert(&task.id, position).is_some() {
            return Err(TaskGraphError::DuplicateTaskId {
                id: task.id.to_string(),
            });
        }

        let nesting = parent.map_or(0, |p| self.entries[p].nesting + 1);
        self.entries.push(FlatTask {
            task,
            parent,
            nesting,
            sibling_index,
        });

        for (i, subtask) in task.subtasks.iter().enumerate() {
            self.push(subtask, Some(position), i)?;
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FlatTask<'a>] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&FlatTask<'a>> {
        self.entries.get(position)
    }

    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.index.get(id).copied()
    }
}

fn byte_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();

    Some((line_start + column.saturating_sub(1)).min(content.len().saturating_sub(1)))
}
