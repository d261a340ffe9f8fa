//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckOptions;
use crate::error::TaskGraphError;

impl FromCommand for CheckOptions {
    fn from_command(command: Commands) -> Result<Self, TaskGraphError> {
        match command {
            Commands::Check { common, format } => CheckOptions::builder()
                .with_layout(common.layout_config()?)
                .with_input(common.input)
                .with_format(format.format)
                .build(),
            _ => Err(TaskGraphError::ConfigurationError {
                message: "Invalid command type for CheckOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckOptions);

/// Execute the check command
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckOptions::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
