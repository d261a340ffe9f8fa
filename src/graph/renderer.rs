use std::collections::HashMap;
use std::io::Write;

use miette::Result;

use super::types::{Edge, EdgeClass, Graph, LineStyle, Node};
use crate::error::TaskGraphError;

// Blue-Orange Accessible Palette
mod colors {
    pub const TASK_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const TASK_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const DONE_NODE_FILL: &str = "#E8F5E9"; // Light green
    pub const DONE_NODE_STROKE: &str = "#388E3C"; // Medium green
    pub const ADHOC_NODE_FILL: &str = "#FAFAFA"; // Off-white
    pub const HIERARCHY_EDGE: &str = "#90A4AE"; // Blue-grey
    pub const DEPENDENCY_EDGE: &str = "#2563EB"; // Strong blue
    pub const DATA_FLOW_EDGE: &str = "#F57C00"; // Vibrant orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(TaskGraphError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(TaskGraphError::from)
    };
}

/// Serializes a compiled graph for downstream renderers
pub struct GraphRenderer {
    pretty: bool,
    show_ports: bool,
}

impl GraphRenderer {
    /// * `pretty` - indent JSON output
    /// * `show_ports` - append port names to data-flow edge labels
    pub fn new(pretty: bool, show_ports: bool) -> Self {
        Self { pretty, show_ports }
    }

    /// The renderer contract: nodes and edges as camelCase JSON
    pub fn render_json(&self, graph: &Graph, output: &mut dyn Write) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *output, graph).map_err(TaskGraphError::from)?;
        } else {
            serde_json::to_writer(&mut *output, graph).map_err(TaskGraphError::from)?;
        }
        writeln_out!(output)?;
        Ok(())
    }

    pub fn render_mermaid(&self, graph: &Graph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "flowchart TD")?;

        let ids = self.short_ids(graph);

        for node in graph.nodes() {
            let (fill, stroke) = node_colors(node);
            writeln_out!(
                output,
                "    {}[\"{}\"]",
                ids[node.id.as_str()],
                mermaid_label(&node.data.name)
            )?;
            writeln_out!(
                output,
                "    style {} fill:{},stroke:{},stroke-width:2px",
                ids[node.id.as_str()],
                fill,
                stroke
            )?;
        }

        if !graph.edges().is_empty() {
            writeln_out!(output)?;
        }

        for (link_index, edge) in graph.edges().iter().enumerate() {
            let (Some(source), Some(target)) =
                (ids.get(edge.source.as_str()), ids.get(edge.target.as_str()))
            else {
                return Err(TaskGraphError::MissingEndpoint {
                    edge: edge.id.clone(),
                    node: if ids.contains_key(edge.source.as_str()) {
                        edge.target.clone()
                    } else {
                        edge.source.clone()
                    },
                }
                .into());
            };

            let arrow = match (edge.class, edge.style.line) {
                (EdgeClass::Hierarchy, _) => "-.-",
                (EdgeClass::Dependency, LineStyle::Solid) => "-->",
                (EdgeClass::Dependency, LineStyle::Dashed) => "-.->",
                (EdgeClass::DataFlow, _) => "==>",
            };

            match self.edge_label(edge) {
                Some(label) => writeln_out!(
                    output,
                    "    {} {}|\"{}\"| {}",
                    source,
                    arrow,
                    mermaid_label(&label),
                    target
                )?,
                None => writeln_out!(output, "    {} {} {}", source, arrow, target)?,
            }

            let (color, width) = edge_stroke(edge.class);
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:{}px",
                link_index,
                color,
                width
            )?;
        }

        Ok(())
    }

    /// Graphviz DOT with node positions pinned to the computed layout
    pub fn render_dot(&self, graph: &Graph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "digraph task_graph {{")?;
        writeln_out!(output, "    layout=neato;")?;
        writeln_out!(output, "    node [shape=box, style=\"rounded,filled\"];")?;
        writeln_out!(output)?;

        for node in graph.nodes() {
            let (fill, stroke) = node_colors(node);
            // DOT's y axis grows upwards
            writeln_out!(
                output,
                r#"    "{}" [label="{}", fillcolor="{}", color="{}", pos="{},{}!", penwidth=2];"#,
                node.id,
                dot_label(&node.data.name),
                fill,
                stroke,
                node.position.x,
                -node.position.y
            )?;
        }

        writeln_out!(output)?;

        for edge in graph.edges() {
            let (color, width) = edge_stroke(edge.class);
            let style = match edge.style.line {
                LineStyle::Solid => "solid",
                LineStyle::Dashed => "dashed",
            };
            let arrowhead = if edge.style.directed { "normal" } else { "none" };
            let label = self
                .edge_label(edge)
                .map(|label| format!(r#", label="{}""#, dot_label(&label)))
                .unwrap_or_default();

            writeln_out!(
                output,
                r#"    "{}" -> "{}" [style={}, color="{}", penwidth={}, arrowhead={}{}];"#,
                edge.source,
                edge.target,
                style,
                color,
                width,
                arrowhead,
                label
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn edge_label(&self, edge: &Edge) -> Option<String> {
        let label = edge.label.clone()?;
        if !self.show_ports {
            return Some(label);
        }

        match (edge.source_port, edge.target_port) {
            (Some(source), Some(target)) => Some(format!("{label} ({source} → {target})")),
            _ => Some(label),
        }
    }

    /// Mermaid ids must be plain identifiers; task ids may not be
    fn short_ids<'g>(&self, graph: &'g Graph) -> HashMap<&'g str, String> {
        graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.as_str(), format!("n{i}")))
            .collect()
    }
}

fn node_colors(node: &Node) -> (&'static str, &'static str) {
    if node.ad_hoc {
        (colors::ADHOC_NODE_FILL, colors::TASK_NODE_STROKE)
    } else if node.data.completed {
        (colors::DONE_NODE_FILL, colors::DONE_NODE_STROKE)
    } else {
        (colors::TASK_NODE_FILL, colors::TASK_NODE_STROKE)
    }
}

fn edge_stroke(class: EdgeClass) -> (&'static str, u8) {
    match class {
        EdgeClass::Hierarchy => (colors::HIERARCHY_EDGE, 2),
        EdgeClass::Dependency => (colors::DEPENDENCY_EDGE, 2),
        EdgeClass::DataFlow => (colors::DATA_FLOW_EDGE, 3),
    }
}

fn mermaid_label(text: &str) -> String {
    text.replace('"', "#quot;")
}

fn dot_label(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::core::{Link, Task, TaskForest};
    use crate::graph::compile;

    fn sample_graph() -> Graph {
        let forest = TaskForest::new(vec![
            Task::new("1", "Fetch \"raw\" data")
                .with_produce(Link::new("A", "rows"))
                .with_subtask(Task::new("1.1", "Open connection")),
            Task::new("2", "Clean")
                .with_dependency("1")
                .with_ingest(Link::new("A", "rows")),
        ]);
        compile(&forest, &LayoutConfig::default()).unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut output = Vec::new();
        f(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_mermaid_arrows_per_class() {
        let renderer = GraphRenderer::new(false, false);
        let graph = sample_graph();
        let text = render(|out| renderer.render_mermaid(&graph, out));

        assert!(text.starts_with("flowchart TD"));
        assert!(text.contains("n0 -.- n1"));
        assert!(text.contains("n0 --> n2"));
        assert!(text.contains("n0 ==>|\"rows\"| n2"));
        assert!(text.contains("#quot;raw#quot;"));
    }

    #[test]
    fn test_dot_pins_positions() {
        let renderer = GraphRenderer::new(false, true);
        let graph = sample_graph();
        let text = render(|out| renderer.render_dot(&graph, out));

        let first = &graph.nodes()[0];
        assert!(text.contains(&format!("pos=\"{},{}!\"", first.position.x, -first.position.y)));
        assert!(text.contains("arrowhead=none"));
        assert!(text.contains("rows (output-0 → ingest-0)"));
        assert!(text.contains(r#"Fetch \"raw\" data"#));
    }

    #[test]
    fn test_json_round_trips_through_serde_value() {
        let renderer = GraphRenderer::new(true, false);
        let graph = sample_graph();
        let text = render(|out| renderer.render_json(&graph, out));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["nodes"].as_array().unwrap().len(), 3);
        assert_eq!(value["nodes"][1]["isChild"], true);
        assert_eq!(value["nodes"][0]["hasChildren"], true);
    }
}
