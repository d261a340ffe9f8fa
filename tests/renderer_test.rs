//! Rendering tests for compiled and edited graphs

use predicates::prelude::*;
use pretty_assertions::assert_eq;
use task_graph::config::LayoutConfig;
use task_graph::core::{Link, Task, TaskForest};
use task_graph::error::TaskGraphError;
use task_graph::graph::{
    EdgeClass, Graph, GraphEditor, GraphRenderer, NodeIdGenerator, Position, compile,
};

fn sample_graph() -> Graph {
    let forest = TaskForest::new(vec![
        Task::new("1", "Gather \"raw\" data")
            .with_produce(Link::new("raw", "Raw rows"))
            .with_subtask(Task::new("1a", "Query API")),
        Task::new("2", "Clean")
            .with_dependency("1")
            .with_ingest(Link::new("raw", "Raw rows")),
    ]);
    compile(&forest, &LayoutConfig::default()).unwrap()
}

fn render(
    graph: &Graph,
    f: impl Fn(&GraphRenderer, &Graph, &mut Vec<u8>) -> miette::Result<()>,
) -> String {
    let renderer = GraphRenderer::new(false, true);
    let mut output = Vec::new();
    f(&renderer, graph, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_json_output_follows_renderer_contract() {
    let graph = sample_graph();
    let output = render(&graph, |r, g, out| r.render_json(g, out));

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let nodes = value["nodes"].as_array().unwrap();
    let edges = value["edges"].as_array().unwrap();

    assert_eq!(nodes.len(), 3);
    assert_eq!(edges.len(), graph.edges().len());
    assert_eq!(nodes[1]["isChild"], true);
    assert_eq!(nodes[0]["hasChildren"], true);

    let data_flow = edges
        .iter()
        .find(|edge| edge["class"] == "dataFlow")
        .unwrap();
    assert_eq!(data_flow["sourcePort"], "output-0");
    assert_eq!(data_flow["targetPort"], "ingest-0");
    assert_eq!(data_flow["label"], "Raw rows");
}

#[test]
fn test_mermaid_output() {
    let graph = sample_graph();
    let output = render(&graph, |r, g, out| r.render_mermaid(g, out));

    assert!(predicate::str::starts_with("flowchart TD").eval(&output));
    assert!(predicate::str::contains("Gather #quot;raw#quot; data").eval(&output));
    assert!(predicate::str::contains("n0 -.- n1").eval(&output));
    assert!(predicate::str::contains("n0 --> n2").eval(&output));
    assert!(
        predicate::str::contains("n0 ==>|\"Raw rows (output-0 → ingest-0)\"| n2").eval(&output)
    );
    assert!(predicate::str::contains("linkStyle 2").eval(&output));
}

#[test]
fn test_dot_output_pins_positions() {
    let graph = sample_graph();
    let output = render(&graph, |r, g, out| r.render_dot(g, out));

    let parent = graph.node("node_1").unwrap();
    let expected_pos = format!("pos=\"{},{}!\"", parent.position.x, -parent.position.y);

    assert!(predicate::str::starts_with("digraph task_graph {").eval(&output));
    assert!(predicate::str::contains(expected_pos).eval(&output));
    assert!(predicate::str::contains("\\\"raw\\\"").eval(&output));
    assert!(predicate::str::contains("arrowhead=none").eval(&output));
    assert!(predicate::str::ends_with("}\n").eval(&output));
}

#[test]
fn test_edited_graph_renders_manual_edges() {
    let graph = sample_graph();
    let mut ids = NodeIdGenerator::new();

    let (graph, note) =
        GraphEditor::add_ad_hoc_node(&graph, "Review", Position::new(10.0, 20.0), &mut ids)
            .unwrap();
    let graph = GraphEditor::connect(&graph, "node_2", &note).unwrap();

    assert_eq!(graph.nodes().len(), 4);
    assert_eq!(graph.edges_of_class(EdgeClass::Dependency).count(), 2);

    let output = render(&graph, |r, g, out| r.render_mermaid(g, out));
    assert!(predicate::str::contains("n3[\"Review\"]").eval(&output));
    assert!(predicate::str::contains("n2 --> n3").eval(&output));
}

#[test]
fn test_manual_edges_are_validated() {
    let graph = sample_graph();

    assert!(matches!(
        GraphEditor::connect(&graph, "node_2", "node_2"),
        Err(TaskGraphError::SelfLoop { .. })
    ));
    assert!(matches!(
        GraphEditor::connect(&graph, "node_1", "node_2"),
        Err(TaskGraphError::DuplicateConnection { .. })
    ));
    assert!(matches!(
        GraphEditor::connect(&graph, "node_1", "node_missing"),
        Err(TaskGraphError::MissingEndpoint { .. })
    ));
}
