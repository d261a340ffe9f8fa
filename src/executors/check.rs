//! Check command executor

use console::style;
use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::CheckOptions;
use crate::core::TaskForest;
use crate::executors::CommandExecutor;
use crate::graph::compile;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckOptions;

    fn execute(config: Self::Config) -> Result<()> {
        if config.format == OutputFormat::Human {
            eprintln!(
                "{} Checking task forest {}...\n",
                style("🧭").cyan(),
                style(config.input.display()).bold()
            );
        }

        let forest = TaskForest::from_file(&config.input)?;
        let graph = compile(&forest, &config.layout).wrap_err("Task forest failed to compile")?;

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&graph)?,
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&graph)?,
        };

        println!("{report}");
        Ok(())
    }
}
