//! # Configuration Module
//!
//! Configuration structures for the layout engine and each CLI command, all
//! built through builders implementing [`ConfigBuilder`].
//!
//! ## Configurations
//!
//! - **LayoutConfig**: canvas width, box size, and spacing used by the layout
//!   engine; optionally seeded from a TOML file
//! - **CompileOptions**: configuration for the `compile` command
//! - **CheckOptions**: configuration for the `check` command
//!
//! ## Example
//!
//! ```
//! use task_graph::common::ConfigBuilder;
//! use task_graph::config::LayoutConfig;
//!
//! let layout = LayoutConfig::builder()
//!     .with_canvas_width(Some(2400.0))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(layout.canvas_width, 2400.0);
//! ```
//!
//! [`ConfigBuilder`]: crate::common::ConfigBuilder

pub mod check;
pub mod compile;
pub mod layout;

pub use check::CheckOptions;
pub use compile::CompileOptions;
pub use layout::{LayoutConfig, LayoutConfigBuilder, LayoutFile};
