//! Configuration constants for task-graph
//!
//! Defaults for the layout engine and the CLI. Layout values can be
//! overridden through a TOML file, command-line flags, or environment
//! variables.

/// Layout defaults, in canvas units
pub mod layout {
    /// Fixed canvas width that bands are centred against
    pub const CANVAS_WIDTH: f64 = 1600.0;

    /// Rendered width of a task box
    pub const NODE_WIDTH: f64 = 400.0;

    /// Rendered height of a task box
    pub const NODE_HEIGHT: f64 = 250.0;

    /// Minimum clearance between two boxes
    pub const MIN_GAP: f64 = 50.0;
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph format when not specified
    pub const DEFAULT_GRAPH_FORMAT: &str = "json";
}

/// Logging configuration
pub mod logging {
    /// Environment variable holding the tracing filter directive
    pub const FILTER_ENV: &str = "TASK_GRAPH_LOG";

    /// Filter used when the environment variable is unset
    pub const DEFAULT_FILTER: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_defaults_leave_room_between_boxes() {
        assert!(layout::CANVAS_WIDTH > layout::NODE_WIDTH);
        assert!(layout::MIN_GAP > 0.0);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_eq!(output::DEFAULT_GRAPH_FORMAT, "json");
    }
}
