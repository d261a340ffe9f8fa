use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "task-graph",
    about = "🧭 Compile task forests into positioned diagram graphs",
    long_about = "task-graph reads a JSON task forest (tasks, nested subtasks, ordering \
                  dependencies, and typed data links) and compiles it into a graph of positioned \
                  nodes and classified edges that a diagram renderer can draw directly.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a task forest into a renderable graph
    ///
    /// Assigns dependency levels, lays the tasks out on a fixed-width canvas,
    /// and derives hierarchy, dependency, and data-flow edges.
    #[command(
        long_about = "Compile a task forest into a graph. Root tasks are banded by dependency \
                      level, subtasks are centred under their parents, and edges are derived for \
                      every subtask, dependency, and matching produce/ingest link. The result can \
                      be written as JSON for a diagram widget, or as Mermaid or Graphviz DOT for \
                      documentation."
    )]
    Compile {
        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "TASK_GRAPH_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "TASK_GRAPH_OUTPUT")]
        output: Option<PathBuf>,

        /// Indent JSON output
        #[arg(long, env = "TASK_GRAPH_PRETTY")]
        pretty: bool,

        /// Include port names in data-flow edge labels
        #[arg(long, env = "TASK_GRAPH_SHOW_PORTS")]
        show_ports: bool,
    },

    /// Validate a task forest and summarise the compiled graph
    ///
    /// Reports dangling dependencies, dependency cycles, and conflicting
    /// ingest links, or prints node and edge counts when the forest is clean.
    #[command(
        long_about = "Compile a task forest without writing the graph, and print a summary of \
                      the result. Structural problems (unknown dependency ids, dependency \
                      cycles, duplicate task ids, duplicate ingest links) are reported as \
                      diagnostics and cause a non-zero exit status."
    )]
    Check {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Json,
    Mermaid,
    Dot,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compile_command() {
        let cli = Cli::try_parse_from([
            "task-graph",
            "compile",
            "tasks.json",
            "--format",
            "mermaid",
            "--canvas-width",
            "2000",
        ])
        .unwrap();

        match cli.command {
            Commands::Compile { common, format, .. } => {
                assert_eq!(common.input, PathBuf::from("tasks.json"));
                assert_eq!(common.layout.canvas_width, Some(2000.0));
                assert_eq!(format, GraphFormat::Mermaid);
            }
            _ => panic!("Expected Compile command"),
        }
    }

    #[test]
    fn test_parse_check_command() {
        let cli =
            Cli::try_parse_from(["task-graph", "check", "tasks.json", "-f", "json"]).unwrap();

        match cli.command {
            Commands::Check { format, .. } => assert_eq!(format.format, OutputFormat::Json),
            _ => panic!("Expected Check command"),
        }
    }
}
