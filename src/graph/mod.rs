//! # Graph Compilation and Rendering Module
//!
//! This module turns a task forest into a positioned, classified graph and
//! serializes it for diagram renderers.
//!
//! ## Pipeline
//!
//! - **LevelAssigner**: longest-path dependency levels, failing cleanly on
//!   cycles and unknown dependency ids
//! - **LayoutEngine**: deterministic coordinates from levels and nesting
//! - **EdgeSynthesizer**: hierarchy, dependency, and data-flow edges with
//!   port addressing and de-duplication
//! - **GraphAssembler**: runs the stages in order and returns one [`Graph`]
//!
//! ## Around the pipeline
//!
//! - **GraphEditor**: validates manual connections and ad-hoc nodes
//! - **GraphRenderer**: JSON, Mermaid, and DOT output
//!
//! ## Example
//!
//! ```
//! use task_graph::config::LayoutConfig;
//! use task_graph::core::{Link, Task, TaskForest};
//! use task_graph::graph::{EdgeClass, compile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let forest = TaskForest::new(vec![
//!     Task::new("1", "Fetch").with_produce(Link::new("A", "out")),
//!     Task::new("2", "Parse")
//!         .with_dependency("1")
//!         .with_ingest(Link::new("A", "in")),
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

mod assembler;
mod edges;
mod editor;
mod layout;
mod levels;
mod renderer;
mod types;

pub use assembler::{GraphAssembler, compile};
pub use edges::{EdgeSynthesizer, dedup_edges};
pub use editor::{GraphEditor, NodeIdGenerator};
pub use layout::LayoutEngine;
pub use levels::{LevelAssigner, Levels};
pub use renderer::GraphRenderer;
pub use types::{
    Edge, EdgeClass, EdgeStyle, Graph, LineStyle, Node, NodeData, Port, Position,
};
