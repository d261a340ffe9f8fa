//! Compile command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CompileOptions;
use crate::error::TaskGraphError;

impl FromCommand for CompileOptions {
    fn from_command(command: Commands) -> Result<Self, TaskGraphError> {
        match command {
            Commands::Compile {
                common,
                format,
                output,
                pretty,
                show_ports,
            } => CompileOptions::builder()
                .with_layout(common.layout_config()?)
                .with_input(common.input)
                .with_format(format)
                .with_output(output)
                .with_pretty(pretty)
                .with_show_ports(show_ports)
                .build(),
            _ => Err(TaskGraphError::ConfigurationError {
                message: "Invalid command type for CompileOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CompileOptions);

/// Execute the compile command
pub fn execute_compile_command(command: Commands) -> Result<()> {
    let config = CompileOptions::from_command(command)
        .wrap_err("Failed to parse compile command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::compile::CompileExecutor;
    CompileExecutor::execute(config)
}
