use miette::Result;
use task_graph::constants::logging::{DEFAULT_FILTER, FILTER_ENV};
use tracing_subscriber::EnvFilter;

/// Main entry point for the task-graph CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for beautiful error reporting
    miette::set_panic_hook();

    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Run the library's main function
    task_graph::run()
}
