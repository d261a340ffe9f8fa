//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::TaskGraphError;
use crate::graph::{EdgeClass, Graph};

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, graph: &Graph) -> Result<String, TaskGraphError> {
        let nodes = graph.nodes();

        let levels: Vec<_> = nodes
            .iter()
            .map(|node| {
                json!({
                    "id": node.id,
                    "name": node.data.name,
                    "level": node.level,
                    "depth": node.depth,
                    "is_child": node.is_child,
                })
            })
            .collect();

        let report = json!({
            "ok": true,
            "node_count": nodes.len(),
            "edge_count": graph.edges().len(),
            "edges": {
                "hierarchy": graph.edges_of_class(EdgeClass::Hierarchy).count(),
                "dependency": graph.edges_of_class(EdgeClass::Dependency).count(),
                "dataFlow": graph.edges_of_class(EdgeClass::DataFlow).count(),
            },
            "completed": nodes.iter().filter(|node| node.data.completed).count(),
            "max_level": nodes.iter().map(|node| node.level).max().unwrap_or(0),
            "nodes": levels,
        });

        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::core::{Task, TaskForest};
    use crate::graph::compile;

    #[test]
    fn test_json_report_counts() {
        let forest = TaskForest::new(vec![
            Task::new("1", "a"),
            Task::new("2", "b").with_dependency("1"),
            Task::new("3", "c").with_dependency("2"),
        ]);
        let graph = compile(&forest, &LayoutConfig::default()).unwrap();

        let report = JsonReportGenerator::new().generate_report(&graph).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["node_count"], 3);
        assert_eq!(value["edges"]["dependency"], 2);
        assert_eq!(value["edges"]["hierarchy"], 0);
        assert_eq!(value["max_level"], 2);
        assert_eq!(value["nodes"][2]["level"], 2);
    }
}
