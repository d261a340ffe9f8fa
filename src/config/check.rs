//! Check command configuration

use std::path::PathBuf;

use super::LayoutConfig;
use crate::cli::OutputFormat;

#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub input: PathBuf,
    pub layout: LayoutConfig,
    pub format: OutputFormat,
}

impl CheckOptions {
    pub fn builder() -> CheckOptionsBuilder {
        CheckOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckOptionsBuilder {
    input: Option<PathBuf>,
    layout: Option<LayoutConfig>,
    format: Option<OutputFormat>,
}

impl CheckOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for CheckOptionsBuilder {
    type Config = CheckOptions;

    fn build(self) -> Result<Self::Config, crate::error::TaskGraphError> {
        Ok(CheckOptions {
            input: self.input.ok_or_else(|| {
                crate::error::TaskGraphError::ConfigurationError {
                    message: "Missing required field: input".to_string(),
                }
            })?,
            layout: self.layout.unwrap_or_default(),
            format: self.format.unwrap_or(OutputFormat::Human),
        })
    }
}
