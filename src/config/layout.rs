//! Layout configuration
//!
//! All geometry the layout engine uses lives here, so that compiling the same
//! forest with the same `LayoutConfig` always produces the same coordinates.

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::common::ConfigBuilder;
use crate::constants::layout::{CANVAS_WIDTH, MIN_GAP, NODE_HEIGHT, NODE_WIDTH};
use crate::error::TaskGraphError;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub canvas_width: f64,
    pub node_width: f64,
    pub node_height: f64,
    pub min_gap: f64,
    /// Horizontal distance between the left edges of neighbouring boxes
    pub sibling_spacing: f64,
    /// Vertical distance between the top edges of neighbouring rows
    pub level_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            node_width: NODE_WIDTH,
            node_height: NODE_HEIGHT,
            min_gap: MIN_GAP,
            sibling_spacing: NODE_WIDTH + MIN_GAP,
            level_spacing: NODE_HEIGHT + MIN_GAP,
        }
    }
}

impl LayoutConfig {
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::new()
    }
}

/// Shape of the optional TOML layout file; every key may be omitted
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutFile {
    pub canvas_width: Option<f64>,
    pub node_width: Option<f64>,
    pub node_height: Option<f64>,
    pub min_gap: Option<f64>,
    pub sibling_spacing: Option<f64>,
    pub level_spacing: Option<f64>,
}

impl LayoutFile {
    pub fn parse_file(path: &Path) -> Result<Self, TaskGraphError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TaskGraphError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        toml::from_str(&content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            TaskGraphError::TomlParseError(Box::new(crate::error::TomlParseError {
                file: path.display().to_string(),
                source_code: NamedSource::new(path.display().to_string(), content.clone()),
                span,
                source: e,
            }))
        })
    }
}

#[derive(Default)]
pub struct LayoutConfigBuilder {
    canvas_width: Option<f64>,
    node_width: Option<f64>,
    node_height: Option<f64>,
    min_gap: Option<f64>,
    sibling_spacing: Option<f64>,
    level_spacing: Option<f64>,
}

impl LayoutConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder from a layout file; later `with_*` calls win
    pub fn with_file(mut self, file: LayoutFile) -> Self {
        self.canvas_width = file.canvas_width.or(self.canvas_width);
        self.node_width = file.node_width.or(self.node_width);
        self.node_height = file.node_height.or(self.node_height);
        self.min_gap = file.min_gap.or(self.min_gap);
        self.sibling_spacing = file.sibling_spacing.or(self.sibling_spacing);
        self.level_spacing = file.level_spacing.or(self.level_spacing);
        self
    }

    pub fn with_canvas_width(mut self, canvas_width: Option<f64>) -> Self {
        self.canvas_width = canvas_width.or(self.canvas_width);
        self
    }

    pub fn with_node_width(mut self, node_width: Option<f64>) -> Self {
        self.node_width = node_width.or(self.node_width);
        self
    }

    pub fn with_node_height(mut self, node_height: Option<f64>) -> Self {
        self.node_height = node_height.or(self.node_height);
        self
    }

    pub fn with_min_gap(mut self, min_gap: Option<f64>) -> Self {
        self.min_gap = min_gap.or(self.min_gap);
        self
    }

    pub fn with_sibling_spacing(mut self, sibling_spacing: Option<f64>) -> Self {
        self.sibling_spacing = sibling_spacing.or(self.sibling_spacing);
        self
    }

    pub fn with_level_spacing(mut self, level_spacing: Option<f64>) -> Self {
        self.level_spacing = level_spacing.or(self.level_spacing);
        self
    }
}

fn require_positive(name: &str, value: f64) -> Result<f64, TaskGraphError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TaskGraphError::ConfigurationError {
            message: format!("{name} must be a positive number, got {value}"),
        })
    }
}

impl ConfigBuilder for LayoutConfigBuilder {
    type Config = LayoutConfig;

    fn build(self) -> Result<Self::Config, TaskGraphError> {
        let canvas_width =
            require_positive("canvas_width", self.canvas_width.unwrap_or(CANVAS_WIDTH))?;
        let node_width = require_positive("node_width", self.node_width.unwrap_or(NODE_WIDTH))?;
        let node_height =
            require_positive("node_height", self.node_height.unwrap_or(NODE_HEIGHT))?;
        let min_gap = require_positive("min_gap", self.min_gap.unwrap_or(MIN_GAP))?;

        // Spacing follows the box size unless pinned explicitly
        let sibling_spacing = require_positive(
            "sibling_spacing",
            self.sibling_spacing.unwrap_or(node_width + min_gap),
        )?;
        let level_spacing = require_positive(
            "level_spacing",
            self.level_spacing.unwrap_or(node_height + min_gap),
        )?;

        if sibling_spacing < node_width + min_gap {
            return Err(TaskGraphError::ConfigurationError {
                message: format!(
                    "sibling_spacing ({sibling_spacing}) must be at least node_width + min_gap \
                     ({})",
                    node_width + min_gap
                ),
            });
        }

        if level_spacing < node_height + min_gap {
            return Err(TaskGraphError::ConfigurationError {
                message: format!(
                    "level_spacing ({level_spacing}) must be at least node_height + min_gap \
                     ({})",
                    node_height + min_gap
                ),
            });
        }

        Ok(LayoutConfig {
            canvas_width,
            node_width,
            node_height,
            min_gap,
            sibling_spacing,
            level_spacing,
        })
    }
}
