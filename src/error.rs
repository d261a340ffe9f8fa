use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(task_graph::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid task forest JSON in '{file}'")]
#[diagnostic(
    code(task_graph::json_parse_error),
    help("A task forest is a JSON array of tasks or an object with a \"tasks\" array")
)]
pub struct JsonParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("parse error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum TaskGraphError {
    #[error("Task '{task}' depends on unknown task '{dependency}'")]
    #[diagnostic(
        code(task_graph::dangling_dependency),
        help("Every dependency id must name a task somewhere in the forest")
    )]
    DanglingDependency { task: String, dependency: String },

    #[error("Dependency cycle detected between tasks: {}", tasks.join(" → "))]
    #[diagnostic(
        code(task_graph::cycle_detected),
        help("Remove one of the dependencies so the tasks form a DAG")
    )]
    CycleDetected { tasks: Vec<String> },

    #[error("Task '{task}' ingests link '{link_id}' more than once")]
    #[diagnostic(
        code(task_graph::invalid_link_match),
        help("Each ingest port must carry a distinct link_id")
    )]
    InvalidLinkMatch { task: String, link_id: String },

    #[error("Edge '{edge}' references missing node '{node}'")]
    #[diagnostic(
        code(task_graph::missing_endpoint),
        help("This is likely an internal error - please report it")
    )]
    MissingEndpoint { edge: String, node: String },

    #[error("Task id '{id}' appears more than once")]
    #[diagnostic(
        code(task_graph::duplicate_task_id),
        help("Task ids must be unique across all tasks and subtasks")
    )]
    DuplicateTaskId { id: String },

    #[error("Cannot connect node '{node}' to itself")]
    #[diagnostic(code(task_graph::self_loop))]
    SelfLoop { node: String },

    #[error("Ad-hoc node label is empty")]
    #[diagnostic(
        code(task_graph::empty_label),
        help("Give the node a label with at least one visible character")
    )]
    EmptyNodeLabel,

    #[error("Nodes '{source_node}' and '{target_node}' are already connected")]
    #[diagnostic(code(task_graph::duplicate_connection))]
    DuplicateConnection {
        source_node: String,
        target_node: String,
    },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(task_graph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    JsonParseError(Box<JsonParseError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(task_graph::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(task_graph::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(task_graph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(task_graph::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
