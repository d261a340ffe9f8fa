//! Validation for manual edits made on the rendered diagram
//!
//! Both operations return a new [`Graph`]; the compiled graph is never
//! mutated in place.

use tracing::debug;

use super::types::{Edge, EdgeClass, EdgeStyle, Graph, Node, NodeData, Position};
use crate::error::TaskGraphError;

/// Source of ids for nodes that no task backs
///
/// Callers own the generator and pass it to each edit, so there is no
/// process-wide counter to drift between sessions.
#[derive(Debug, Clone, Default)]
pub struct NodeIdGenerator {
    next: usize,
}

impl NodeIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id not already present in `graph`
    pub fn next_id(&mut self, graph: &Graph) -> String {
        loop {
            let candidate = format!("node_adhoc_{}", self.next);
            self.next += 1;
            if graph.node(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

pub struct GraphEditor;

impl GraphEditor {
    /// Add a user-drawn connection from `source` to `target`
    ///
    /// Self-loops and any second edge between the same ordered pair are
    /// rejected; nothing else about the connection is checked.
    pub fn connect(graph: &Graph, source: &str, target: &str) -> Result<Graph, TaskGraphError> {
        if source == target {
            return Err(TaskGraphError::SelfLoop {
                node: source.to_string(),
            });
        }

        let id = format!("manual-{source}-{target}");
        for endpoint in [source, target] {
            if graph.node(endpoint).is_none() {
                return Err(TaskGraphError::MissingEndpoint {
                    edge: id.clone(),
                    node: endpoint.to_string(),
                });
            }
        }

        if graph
            .edges()
            .iter()
            .any(|edge| edge.source == source && edge.target == target)
        {
            return Err(TaskGraphError::DuplicateConnection {
                source_node: source.to_string(),
                target_node: target.to_string(),
            });
        }

        debug!(source, target, "manual connection added");

        let mut edges = graph.edges().to_vec();
        edges.push(Edge {
            id,
            source: source.to_string(),
            target: target.to_string(),
            class: EdgeClass::Dependency,
            source_port: None,
            target_port: None,
            style: EdgeStyle::dependency(false),
            label: None,
        });

        Ok(Graph::from_parts(graph.nodes().to_vec(), edges))
    }

    /// Add a free-standing node labelled `label` at `position`
    pub fn add_ad_hoc_node(
        graph: &Graph,
        label: &str,
        position: Position,
        ids: &mut NodeIdGenerator,
    ) -> Result<(Graph, String), TaskGraphError> {
        if label.trim().is_empty() {
            return Err(TaskGraphError::EmptyNodeLabel);
        }

        let id = ids.next_id(graph);
        let mut nodes = graph.nodes().to_vec();
        nodes.push(Node {
            id: id.clone(),
            task_id: None,
            depth: 0,
            level: 0,
            position,
            is_child: false,
            has_children: false,
            ad_hoc: true,
            ingests: Vec::new(),
            produces: Vec::new(),
            data: NodeData {
                name: label.to_string(),
                description: String::new(),
                completed: false,
            },
        });

        debug!(%id, "ad-hoc node added");

        Ok((Graph::from_parts(nodes, graph.edges().to_vec()), id))
    }
}
