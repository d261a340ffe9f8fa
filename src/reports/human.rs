//! Human-readable console report generation

use std::collections::BTreeMap;
use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::TaskGraphError;
use crate::graph::{EdgeClass, Graph};
use crate::utils::string::pluralize;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, graph: &Graph) -> Result<String, TaskGraphError> {
        let mut output = String::new();

        if graph.is_empty() {
            write!(
                output,
                "\n{} Task forest is empty, nothing to compile.\n",
                style("ℹ").blue().bold()
            )?;
            return Ok(output);
        }

        let nodes = graph.nodes();
        let completed = nodes.iter().filter(|node| node.data.completed).count();
        let children = nodes.iter().filter(|node| node.is_child).count();

        write!(
            output,
            "\n{} Task forest compiled cleanly: {} {} ({} {}, {} completed)\n\n",
            style("✅").green().bold(),
            style(nodes.len()).yellow().bold(),
            pluralize("task", nodes.len()),
            children,
            pluralize("subtask", children),
            completed
        )?;

        writeln!(output, "{} Edges:", style("🔗").blue())?;
        for class in [EdgeClass::Hierarchy, EdgeClass::Dependency, EdgeClass::DataFlow] {
            let count = graph.edges_of_class(class).count();
            writeln!(
                output,
                "  - {:<11} {}",
                class.as_str(),
                style(count).yellow().bold()
            )?;
        }

        // Group root tasks by their dependency level
        let mut levels: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for node in nodes.iter().filter(|node| !node.is_child) {
            levels
                .entry(node.level)
                .or_default()
                .push(node.data.name.as_str());
        }

        writeln!(output, "\n{} Levels:", style("📊").blue())?;
        for (level, names) in &levels {
            writeln!(
                output,
                "  {} {} ({} {}): {}",
                style("Level").dim(),
                style(level).bold(),
                names.len(),
                pluralize("task", names.len()),
                names.join(", ")
            )?;
        }

        let rows = nodes.iter().map(|node| node.depth).max().unwrap_or(0) + 1;
        write!(
            output,
            "\n{} Layout spans {} {}\n",
            style("📐").cyan(),
            style(rows).yellow().bold(),
            pluralize("row", rows)
        )?;

        Ok(output)
    }
}
