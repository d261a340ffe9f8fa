//! Core data types and structures
//!
//! This module contains the input side of the compiler: the task forest as
//! supplied by the caller, and a flattened view used by every pipeline stage.

pub mod forest;
pub mod types;

pub use forest::{FlatForest, FlatTask, TaskForest};
pub use types::*;
