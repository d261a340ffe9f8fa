//! # task-graph - Compile Task Forests into Diagram Graphs
//!
//! task-graph turns a nested task hierarchy (tasks, subtasks, ordering
//! dependencies, and typed data links between producers and consumers) into
//! a renderable graph: positioned nodes plus classified, port-addressed
//! edges, ready for a diagram widget or a text format like Mermaid.
//!
//! ## Main Components
//!
//! - **Core**: The task forest data model and its JSON loader
//! - **Graph**: Level assignment, layout, edge synthesis, and assembly, plus
//!   interactive editing and rendering of the compiled graph
//! - **Config**: Layout geometry and per-command options
//! - **Reports**: Human-readable and machine-readable graph summaries
//!
//! ## Usage
//!
//! ### Example: Compiling a Small Pipeline
//!
//! ```
//! use task_graph::config::LayoutConfig;
//! use task_graph::core::{Link, Task, TaskForest};
//! use task_graph::graph::{EdgeClass, compile};
//!
//! # fn main() -> Result<(), task_graph::error::TaskGraphError> {
//! let forest = TaskForest::new(vec![
//!     Task::new("1", "Fetch").with_produce(Link::new("raw", "Raw pages")),
//!     Task::new("2", "Parse")
//!         .with_dependency("1")
//!         .with_ingest(Link::new("raw", "Raw pages")),
//! ]);
//!
//! let graph = compile(&forest, &LayoutConfig::default())?;
//!
//! assert_eq!(graph.nodes().len(), 2);
//! assert_eq!(graph.edges_of_class(EdgeClass::Dependency).count(), 1);
//! assert_eq!(graph.edges_of_class(EdgeClass::DataFlow).count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Rendering and Editing
//!
//! ```no_run
//! use task_graph::config::LayoutConfig;
//! use task_graph::core::TaskForest;
//! use task_graph::graph::{GraphEditor, GraphRenderer, NodeIdGenerator, Position, compile};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let forest = TaskForest::from_file(std::path::Path::new("tasks.json"))?;
//! let graph = compile(&forest, &LayoutConfig::default())?;
//!
//! // Add a free-standing note and wire it to the first task
//! let mut ids = NodeIdGenerator::new();
//! let (graph, note) =
//!     GraphEditor::add_ad_hoc_node(&graph, "Review", Position::new(0.0, 0.0), &mut ids)?;
//! let graph = GraphEditor::connect(&graph, &note, "node_1")?;
//!
//! let mut mermaid = Vec::new();
//! GraphRenderer::new(false, true).render_mermaid(&graph, &mut mermaid)?;
//! std::fs::write("tasks.mmd", mermaid).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;

pub use graph::compile;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
