//! Edge synthesis for hierarchy, dependency, and data-flow relationships
//!
//! Each relationship class is derived by its own pass over the flattened
//! forest. The passes are merged in class order and de-duplicated on
//! `(source, target, class)`, keeping the first occurrence.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use super::types::{Edge, EdgeClass, EdgeStyle, Node, Port};
use crate::core::FlatForest;
use crate::error::TaskGraphError;

pub struct EdgeSynthesizer<'f, 'a> {
    forest: &'f FlatForest<'a>,
    /// `isChild` per node id, from the nodes laid out so far
    is_child: HashMap<&'f str, bool>,
}

fn edge_id(class: EdgeClass, source: &str, target: &str) -> String {
    format!("{class}-{source}-{target}")
}

impl<'f, 'a> EdgeSynthesizer<'f, 'a> {
    pub fn new(forest: &'f FlatForest<'a>, nodes: &'f [Node]) -> Self {
        Self {
            forest,
            is_child: nodes
                .iter()
                .map(|node| (node.id.as_str(), node.is_child))
                .collect(),
        }
    }

    /// Unknown nodes count as non-subtasks rather than failing the compile
    fn node_is_child(&self, node_id: &str) -> bool {
        self.is_child.get(node_id).copied().unwrap_or(false)
    }

    pub fn synthesize(&self) -> Result<Vec<Edge>, TaskGraphError> {
        self.check_ingest_links()?;

        let hierarchy = self.hierarchy_edges();
        let dependency = self.dependency_edges();
        let data_flow = self.data_flow_edges();

        debug!(
            hierarchy = hierarchy.len(),
            dependency = dependency.len(),
            data_flow = data_flow.len(),
            "edge passes complete"
        );

        Ok(dedup_edges(
            hierarchy.into_iter().chain(dependency).chain(data_flow),
        ))
    }

    /// Reject ingest lists that name the same link twice
    fn check_ingest_links(&self) -> Result<(), TaskGraphError> {
        for entry in self.forest.entries() {
            let mut seen = HashSet::new();
            for link in &entry.task.ingests {
                if !seen.insert(link.link_id.as_str()) {
                    return Err(TaskGraphError::InvalidLinkMatch {
                        task: entry.task.id.to_string(),
                        link_id: link.link_id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// One edge per direct (task, subtask) pair
    pub fn hierarchy_edges(&self) -> Vec<Edge> {
        self.forest
            .entries()
            .iter()
            .filter_map(|entry| {
                let parent = self.forest.get(entry.parent?)?;
                let source = parent.task.id.node_id();
                let target = entry.task.id.node_id();

                Some(Edge {
                    id: edge_id(EdgeClass::Hierarchy, &source, &target),
                    source,
                    target,
                    class: EdgeClass::Hierarchy,
                    source_port: Some(Port::Bottom),
                    target_port: Some(Port::Top),
                    style: EdgeStyle::hierarchy(),
                    label: None,
                })
            })
            .collect()
    }

    /// One edge per `dependency -> task` pair
    pub fn dependency_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();

        for entry in self.forest.entries() {
            let target = entry.task.id.node_id();

            for dep in &entry.task.dependencies {
                let source = dep.node_id();
                let tier_crossing = !self.node_is_child(&source) && self.node_is_child(&target);

                trace!(%source, %target, tier_crossing, "dependency edge");

                edges.push(Edge {
                    id: edge_id(EdgeClass::Dependency, &source, &target),
                    source,
                    target: target.clone(),
                    class: EdgeClass::Dependency,
                    source_port: None,
                    target_port: None,
                    style: EdgeStyle::dependency(tier_crossing),
                    label: None,
                });
            }
        }

        edges
    }

    /// One edge per (producer, ingester) pair sharing a link id
    pub fn data_flow_edges(&self) -> Vec<Edge> {
        let entries = self.forest.entries();
        let mut edges = Vec::new();

        for (producer_pos, producer) in entries.iter().enumerate() {
            for (output_index, produced) in producer.task.produces.iter().enumerate() {
                for (ingester_pos, ingester) in entries.iter().enumerate() {
                    if ingester_pos == producer_pos {
                        continue;
                    }

                    let Some(ingest_index) = ingester
                        .task
                        .ingests
                        .iter()
                        .position(|link| link.link_id == produced.link_id)
                    else {
                        continue;
                    };

                    let source = producer.task.id.node_id();
                    let target = ingester.task.id.node_id();

                    edges.push(Edge {
                        id: edge_id(EdgeClass::DataFlow, &source, &target),
                        source,
                        target,
                        class: EdgeClass::DataFlow,
                        source_port: Some(Port::Output(output_index)),
                        target_port: Some(Port::Ingest(ingest_index)),
                        style: EdgeStyle::data_flow(),
                        label: Some(produced.link_name.clone()),
                    });
                }
            }
        }

        edges
    }
}

/// Keep the first edge of every `(source, target, class)` triple, in order
pub fn dedup_edges(edges: impl IntoIterator<Item = Edge>) -> Vec<Edge> {
    let mut seen: HashSet<(String, String, EdgeClass)> = HashSet::new();

    edges
        .into_iter()
        .filter(|edge| seen.insert((edge.source.clone(), edge.target.clone(), edge.class)))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::LayoutConfig;
    use crate::core::{Link, Task, TaskForest};
    use crate::graph::layout::LayoutEngine;
    use crate::graph::levels::LevelAssigner;
    use crate::graph::types::LineStyle;

    fn synthesize(forest: &TaskForest) -> Result<Vec<Edge>, TaskGraphError> {
        let flat = forest.flatten()?;
        let levels = LevelAssigner::new(&flat).assign()?;
        let config = LayoutConfig::default();
        let nodes = LayoutEngine::new(&config).layout(&flat, &levels);
        EdgeSynthesizer::new(&flat, &nodes).synthesize()
    }

    fn pairs(edges: &[Edge], class: EdgeClass) -> Vec<(&str, &str)> {
        edges
            .iter()
            .filter(|edge| edge.class == class)
            .map(|edge| (edge.source.as_str(), edge.target.as_str()))
            .collect()
    }

    #[test]
    fn test_hierarchy_edges_skip_grandchildren() {
        let forest = TaskForest::new(vec![
            Task::new("1", "root").with_subtask(
                Task::new("1.1", "child")
                    .with_subtask(Task::new("1.1.1", "grandchild"))
                    .with_subtask(Task::new("1.1.2", "grandchild")),
            ),
        ]);
        let edges = synthesize(&forest).unwrap();

        assert_eq!(
            pairs(&edges, EdgeClass::Hierarchy),
            vec![
                ("node_1", "node_1.1"),
                ("node_1.1", "node_1.1.1"),
                ("node_1.1", "node_1.1.2"),
            ]
        );

        let edge = &edges[0];
        assert_eq!(edge.source_port, Some(Port::Bottom));
        assert_eq!(edge.target_port, Some(Port::Top));
        assert_eq!(edge.style.line, LineStyle::Dashed);
    }

    #[test]
    fn test_dependency_edge_direction_and_style() {
        let forest = TaskForest::new(vec![
            Task::new("1", "first"),
            Task::new("2", "second").with_dependency("1"),
        ]);
        let edges = synthesize(&forest).unwrap();

        assert_eq!(pairs(&edges, EdgeClass::Dependency), vec![("node_1", "node_2")]);
        assert_eq!(edges[0].style.line, LineStyle::Solid);
        assert!(edges[0].style.directed);
        assert_eq!(edges[0].id, "dependency-node_1-node_2");
    }

    #[test]
    fn test_tier_crossing_dependency_is_dashed() {
        let forest = TaskForest::new(vec![
            Task::new("setup", "setup"),
            Task::new("p", "parent")
                .with_subtask(Task::new("s1", "child").with_dependency("setup"))
                .with_subtask(Task::new("s2", "child").with_dependency("s1")),
        ]);
        let edges = synthesize(&forest).unwrap();

        let crossing = edges
            .iter()
            .find(|edge| edge.source == "node_setup" && edge.target == "node_s1")
            .unwrap();
        assert_eq!(crossing.style.line, LineStyle::Dashed);

        let same_tier = edges
            .iter()
            .find(|edge| edge.source == "node_s1" && edge.target == "node_s2")
            .unwrap();
        assert_eq!(same_tier.style.line, LineStyle::Solid);
    }

    #[test]
    fn test_unknown_node_defaults_to_not_child() {
        let forest = TaskForest::new(vec![
            Task::new("p", "parent").with_subtask(Task::new("s", "child").with_dependency("x")),
            Task::new("x", "other"),
        ]);
        let flat = forest.flatten().unwrap();

        // No nodes laid out yet: every lookup falls back to `false`
        let synthesizer = EdgeSynthesizer::new(&flat, &[]);
        let edges = synthesizer.dependency_edges();

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].style.line, LineStyle::Solid);
    }

    #[test]
    fn test_data_flow_ports_follow_declaration_order() {
        let forest = TaskForest::new(vec![
            Task::new("1", "producer")
                .with_produce(Link::new("X", "unused"))
                .with_produce(Link::new("A", "out")),
            Task::new("2", "consumer")
                .with_ingest(Link::new("Z", "other"))
                .with_ingest(Link::new("A", "in")),
        ]);
        let edges = synthesize(&forest).unwrap();

        let flow: Vec<&Edge> = edges
            .iter()
            .filter(|edge| edge.class == EdgeClass::DataFlow)
            .collect();
        assert_eq!(flow.len(), 1);
        assert_eq!(flow[0].source_port, Some(Port::Output(1)));
        assert_eq!(flow[0].target_port, Some(Port::Ingest(1)));
        assert_eq!(flow[0].label.as_deref(), Some("out"));
        assert!(flow[0].style.animated);
    }

    #[test]
    fn test_data_flow_reaches_every_ingester_but_not_producer() {
        let forest = TaskForest::new(vec![
            Task::new("1", "producer")
                .with_produce(Link::new("L", "rows"))
                .with_ingest(Link::new("L", "loopback")),
            Task::new("2", "a").with_ingest(Link::new("L", "rows")),
            Task::new("3", "b"),
            Task::new("4", "c").with_ingest(Link::new("L", "rows")),
        ]);
        let edges = synthesize(&forest).unwrap();

        assert_eq!(
            pairs(&edges, EdgeClass::DataFlow),
            vec![("node_1", "node_2"), ("node_1", "node_4")]
        );
    }

    #[test]
    fn test_duplicate_ingest_link_is_rejected() {
        let forest = TaskForest::new(vec![
            Task::new("1", "producer").with_produce(Link::new("A", "out")),
            Task::new("2", "consumer")
                .with_ingest(Link::new("A", "first"))
                .with_ingest(Link::new("A", "second")),
        ]);

        let err = synthesize(&forest).unwrap_err();
        assert!(matches!(
            err,
            TaskGraphError::InvalidLinkMatch { task, link_id } if task == "2" && link_id == "A"
        ));
    }

    #[test]
    fn test_repeated_relationships_collapse() {
        let forest = TaskForest::new(vec![
            Task::new("1", "producer")
                .with_produce(Link::new("A", "first"))
                .with_produce(Link::new("B", "second")),
            Task::new("2", "consumer")
                .with_dependency("1")
                .with_dependency("1")
                .with_ingest(Link::new("A", "a"))
                .with_ingest(Link::new("B", "b")),
        ]);
        let edges = synthesize(&forest).unwrap();

        assert_eq!(pairs(&edges, EdgeClass::Dependency).len(), 1);

        let flow: Vec<&Edge> = edges
            .iter()
            .filter(|edge| edge.class == EdgeClass::DataFlow)
            .collect();
        assert_eq!(flow.len(), 1);
        assert_eq!(flow[0].label.as_deref(), Some("first"));
    }

    #[test]
    fn test_classes_are_kept_apart() {
        let forest = TaskForest::new(vec![
            Task::new("1", "producer").with_produce(Link::new("A", "out")),
            Task::new("2", "consumer")
                .with_dependency("1")
                .with_ingest(Link::new("A", "in")),
        ]);
        let edges = synthesize(&forest).unwrap();

        let classes: Vec<EdgeClass> = edges.iter().map(|edge| edge.class).collect();
        assert_eq!(classes, vec![EdgeClass::Dependency, EdgeClass::DataFlow]);
    }
}
