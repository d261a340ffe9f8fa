//! Compile command configuration

use std::path::PathBuf;

use super::LayoutConfig;
use crate::cli::GraphFormat;

#[derive(Debug, Clone)]
pub struct CompileOptions {
    pub input: PathBuf,
    pub layout: LayoutConfig,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub pretty: bool,
    pub show_ports: bool,
}

impl CompileOptions {
    pub fn builder() -> CompileOptionsBuilder {
        CompileOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct CompileOptionsBuilder {
    input: Option<PathBuf>,
    layout: Option<LayoutConfig>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    pretty: Option<bool>,
    show_ports: Option<bool>,
}

impl CompileOptionsBuilder {
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

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = Some(pretty);
        self
    }

    pub fn with_show_ports(mut self, show_ports: bool) -> Self {
        self.show_ports = Some(show_ports);
        self
    }
}

impl crate::common::ConfigBuilder for CompileOptionsBuilder {
    type Config = CompileOptions;

    fn build(self) -> Result<Self::Config, crate::error::TaskGraphError> {
        Ok(CompileOptions {
            input: self.input.ok_or_else(|| {
                crate::error::TaskGraphError::ConfigurationError {
                    message: "Missing required field: input".to_string(),
                }
            })?,
            layout: self.layout.unwrap_or_default(),
            format: self.format.ok_or_else(|| {
                crate::error::TaskGraphError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            output: self.output.unwrap_or_default(),
            pretty: self.pretty.unwrap_or(false),
            show_ports: self.show_ports.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_builder_requires_input() {
        let err = CompileOptions::builder()
            .with_format(GraphFormat::Json)
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: input"
        );
    }

    #[test]
    fn test_builder_defaults() {
        let options = CompileOptions::builder()
            .with_input(PathBuf::from("tasks.json"))
            .with_format(GraphFormat::Dot)
            .build()
            .unwrap();

        assert_eq!(options.layout, LayoutConfig::default());
        assert!(options.output.is_none());
        assert!(!options.pretty);
    }
}
