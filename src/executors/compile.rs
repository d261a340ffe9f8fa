//! Compile command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

use crate::cli::GraphFormat;
use crate::config::CompileOptions;
use crate::core::TaskForest;
use crate::executors::CommandExecutor;
use crate::graph::{GraphAssembler, GraphRenderer};
use crate::utils::string::pluralize;

pub struct CompileExecutor;

impl CommandExecutor for CompileExecutor {
    type Config = CompileOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Compiling {} into a {} graph...",
            style("🧭").cyan(),
            style(config.input.display()).bold(),
            format!("{:?}", config.format).to_lowercase()
        );

        let forest = TaskForest::from_file(&config.input)?;

        if forest.is_empty() {
            eprintln!("{} Task forest is empty", style("ℹ").blue());
        }

        // The graph only exists once the whole compile has succeeded
        let graph = GraphAssembler::new(&config.layout)
            .assemble(&forest)
            .wrap_err("Failed to compile task forest")?;

        info!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len(),
            "compiled task forest"
        );

        let renderer = GraphRenderer::new(config.pretty, config.show_ports);

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref()
        {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        match config.format {
            GraphFormat::Json => {
                renderer
                    .render_json(&graph, output_writer.as_mut())
                    .wrap_err("Failed to render JSON graph")?;
            }
            GraphFormat::Mermaid => {
                renderer
                    .render_mermaid(&graph, output_writer.as_mut())
                    .wrap_err("Failed to render Mermaid graph")?;
            }
            GraphFormat::Dot => {
                renderer
                    .render_dot(&graph, output_writer.as_mut())
                    .wrap_err("Failed to render DOT graph")?;
            }
        }

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush graph output")?;

        eprintln!(
            "{} {} {}, {} {}",
            style("✓").green(),
            style(graph.nodes().len()).yellow().bold(),
            pluralize("node", graph.nodes().len()),
            style(graph.edges().len()).yellow().bold(),
            pluralize("edge", graph.edges().len())
        );

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::common::ConfigBuilder;

    const FOREST: &str = r#"[
        {"id": 1, "name": "Fetch", "produces": [{"link_id": "A", "link_name": "out"}]},
        {"id": 2, "name": "Parse", "dependencies": ["1"],
         "ingests": [{"link_id": "A", "link_name": "in"}]}
    ]"#;

    #[test]
    fn test_compile_writes_json_graph() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("tasks.json");
        let output = temp.path().join("graph.json");
        fs::write(&input, FOREST).unwrap();

        let options = CompileOptions::builder()
            .with_input(input)
            .with_format(GraphFormat::Json)
            .with_output(Some(output.clone()))
            .build()
            .unwrap();
        CompileExecutor::execute(options).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(value["nodes"][0]["id"], "node_1");
        assert_eq!(value["edges"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_compile_leaves_no_output_on_cycle() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("tasks.json");
        let output = temp.path().join("graph.json");
        fs::write(
            &input,
            r#"[{"id": 1, "name": "a", "dependencies": [2]},
                {"id": 2, "name": "b", "dependencies": [1]}]"#,
        )
        .unwrap();

        let options = CompileOptions::builder()
            .with_input(input)
            .with_format(GraphFormat::Json)
            .with_output(Some(output.clone()))
            .build()
            .unwrap();

        assert!(CompileExecutor::execute(options).is_err());
        assert!(!output.exists());
    }
}
