//! Command implementations for the task-graph CLI
//!
//! This module contains the implementations for each CLI command:
//! - compile: Compile a task forest into a renderable graph
//! - check: Validate a task forest and summarise the compiled graph

pub mod check;
pub mod compile;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Compile { .. } => compile::execute_compile_command(command),
        Commands::Check { .. } => check::execute_check_command(command),
    }
}
