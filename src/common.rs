//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::config::{LayoutConfig, LayoutFile};
use crate::error::TaskGraphError;

/// Common arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Task forest JSON file
    #[arg(value_name = "INPUT", env = "TASK_GRAPH_INPUT")]
    pub input: PathBuf,

    /// TOML file with layout settings
    #[arg(long, value_name = "FILE", env = "TASK_GRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Layout overrides; each wins over the config file
#[derive(Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// Fixed canvas width that bands are centred against
    #[arg(long, env = "TASK_GRAPH_CANVAS_WIDTH")]
    pub canvas_width: Option<f64>,

    /// Width of a task box
    #[arg(long, env = "TASK_GRAPH_NODE_WIDTH")]
    pub node_width: Option<f64>,

    /// Height of a task box
    #[arg(long, env = "TASK_GRAPH_NODE_HEIGHT")]
    pub node_height: Option<f64>,

    /// Minimum gap between boxes
    #[arg(long, env = "TASK_GRAPH_MIN_GAP")]
    pub min_gap: Option<f64>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "TASK_GRAPH_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

impl CommonArgs {
    /// Resolve the layout: defaults, then the config file, then flags
    pub fn layout_config(&self) -> Result<LayoutConfig, TaskGraphError> {
        let file = match &self.config {
            Some(path) => LayoutFile::parse_file(path)?,
            None => LayoutFile::default(),
        };

        LayoutConfig::builder()
            .with_file(file)
            .with_canvas_width(self.layout.canvas_width)
            .with_node_width(self.layout.node_width)
            .with_node_height(self.layout.node_height)
            .with_min_gap(self.layout.min_gap)
            .build()
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, TaskGraphError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, TaskGraphError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::TaskGraphError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
