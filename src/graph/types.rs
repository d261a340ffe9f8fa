//! Core graph types
//!
//! Output-side data structures handed to the external renderer. Field names
//! serialize in camelCase, matching what diagram widgets expect.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::core::{Link, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Detail-panel payload carried by every node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeData {
    pub name: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    /// `None` for ad-hoc nodes that no task backs
    pub task_id: Option<TaskId>,
    /// Row index; nodes sharing a depth share a horizontal band
    pub depth: usize,
    /// Dependency level from the level assigner
    pub level: usize,
    pub position: Position,
    pub is_child: bool,
    pub has_children: bool,
    pub ad_hoc: bool,
    pub ingests: Vec<Link>,
    pub produces: Vec<Link>,
    pub data: NodeData,
}

/// Relationship class of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeClass {
    Hierarchy,
    Dependency,
    DataFlow,
}

impl EdgeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeClass::Hierarchy => "hierarchy",
            EdgeClass::Dependency => "dependency",
            EdgeClass::DataFlow => "dataFlow",
        }
    }
}

impl fmt::Display for EdgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection point on a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Port {
    Top,
    Bottom,
    Left,
    Right,
    /// Input port, indexed by declaration order of the task's ingests
    Ingest(usize),
    /// Output port, indexed by declaration order of the task's produces
    Output(usize),
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::Top => write!(f, "top"),
            Port::Bottom => write!(f, "bottom"),
            Port::Left => write!(f, "left"),
            Port::Right => write!(f, "right"),
            Port::Ingest(i) => write!(f, "ingest-{i}"),
            Port::Output(i) => write!(f, "output-{i}"),
        }
    }
}

impl Serialize for Port {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Presentation intent; the renderer decides colours and curve shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeStyle {
    pub line: LineStyle,
    pub directed: bool,
    pub animated: bool,
}

impl EdgeStyle {
    pub fn hierarchy() -> Self {
        Self {
            line: LineStyle::Dashed,
            directed: false,
            animated: false,
        }
    }

    pub fn dependency(tier_crossing: bool) -> Self {
        Self {
            line: if tier_crossing {
                LineStyle::Dashed
            } else {
                LineStyle::Solid
            },
            directed: true,
            animated: false,
        }
    }

    pub fn data_flow() -> Self {
        Self {
            line: LineStyle::Solid,
            directed: true,
            animated: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub class: EdgeClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<Port>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_port: Option<Port>,
    pub style: EdgeStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Edge {
    /// De-duplication key
    pub fn key(&self) -> (&str, &str, EdgeClass) {
        (&self.source, &self.target, self.class)
    }
}

/// Compiled diagram: positioned nodes plus classified edges
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub(crate) fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn edges_of_class(&self, class: EdgeClass) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |edge| edge.class == class)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_port_names() {
        assert_eq!(Port::Top.to_string(), "top");
        assert_eq!(Port::Bottom.to_string(), "bottom");
        assert_eq!(Port::Ingest(2).to_string(), "ingest-2");
        assert_eq!(Port::Output(0).to_string(), "output-0");
    }

    #[test]
    fn test_edge_serializes_camel_case_ports() {
        let edge = Edge {
            id: "dataFlow-node_1-node_2".to_string(),
            source: "node_1".to_string(),
            target: "node_2".to_string(),
            class: EdgeClass::DataFlow,
            source_port: Some(Port::Output(0)),
            target_port: Some(Port::Ingest(1)),
            style: EdgeStyle::data_flow(),
            label: Some("rows".to_string()),
        };

        let value = serde_json::to_value(&edge).unwrap();
        assert_eq!(value["sourcePort"], "output-0");
        assert_eq!(value["targetPort"], "ingest-1");
        assert_eq!(value["class"], "dataFlow");
        assert_eq!(value["style"]["animated"], true);
    }

    #[test]
    fn test_dependency_style_marks_tier_crossing() {
        assert_eq!(EdgeStyle::dependency(false).line, LineStyle::Solid);
        assert_eq!(EdgeStyle::dependency(true).line, LineStyle::Dashed);
    }
}
