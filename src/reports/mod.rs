//! Report generation modules for different output formats
//!
//! This module contains report generators for the `check` command:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::TaskGraphError;
use crate::graph::Graph;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a summary report of a compiled graph
    fn generate_report(&self, graph: &Graph) -> Result<String, TaskGraphError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
