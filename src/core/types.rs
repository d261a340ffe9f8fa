//! Core type definitions
//!
//! Input-side data structures: the task forest as supplied by the external
//! prompt-to-task collaborator. These types carry no layout logic.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a task, unique across the flattened forest
///
/// Numeric ids in JSON input are accepted and stored as their decimal
/// string, so `1` and `"1"` name the same task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the node rendered for this task
    pub fn node_id(&self) -> String {
        format!("node_{}", self.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
    }
}

fn deserialize_link_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(String::from)
}

/// A typed data channel attached to a task port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(deserialize_with = "deserialize_link_id")]
    pub link_id: String,
    pub link_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl Link {
    pub fn new(link_id: impl Into<String>, link_name: impl Into<String>) -> Self {
        Self {
            link_id: link_id.into(),
            link_name: link_name.into(),
            link_description: None,
            data_type: None,
        }
    }
}

/// A unit of work, possibly with nested subtasks
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(alias = "task_name")]
    pub name: String,
    #[serde(default, alias = "task_description")]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
    #[serde(default)]
    pub subtasks: Vec<Task>,
    #[serde(default)]
    pub ingests: Vec<Link>,
    #[serde(default)]
    pub produces: Vec<Link>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            completed: false,
            dependencies: Vec::new(),
            subtasks: Vec::new(),
            ingests: Vec::new(),
            produces: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn with_dependency(mut self, id: impl Into<TaskId>) -> Self {
        self.dependencies.push(id.into());
        self
    }

    pub fn with_subtask(mut self, subtask: Task) -> Self {
        self.subtasks.push(subtask);
        self
    }

    pub fn with_ingest(mut self, link: Link) -> Self {
        self.ingests.push(link);
        self
    }

    pub fn with_produce(mut self, link: Link) -> Self {
        self.produces.push(link);
        self
    }

    pub fn has_subtasks(&self) -> bool {
        !self.subtasks.is_empty()
    }
}
