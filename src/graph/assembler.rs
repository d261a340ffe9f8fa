use std::collections::HashSet;

use tracing::{debug, instrument};

use super::edges::EdgeSynthesizer;
use super::layout::LayoutEngine;
use super::levels::LevelAssigner;
use super::types::Graph;
use crate::config::LayoutConfig;
use crate::core::TaskForest;
use crate::error::TaskGraphError;

/// Runs the full compile pipeline over a task forest
///
/// The assembler holds only configuration; every call to
/// [`GraphAssembler::assemble`] rebuilds the graph from scratch, so the same
/// forest always yields the same graph.
pub struct GraphAssembler<'c> {
    config: &'c LayoutConfig,
}

impl<'c> GraphAssembler<'c> {
    pub fn new(config: &'c LayoutConfig) -> Self {
        Self { config }
    }

    #[instrument(skip_all, fields(roots = forest.roots().len()))]
    pub fn assemble(&self, forest: &TaskForest) -> Result<Graph, TaskGraphError> {
        let flat = forest.flatten()?;
        let levels = LevelAssigner::new(&flat).assign()?;
        let nodes = LayoutEngine::new(self.config).layout(&flat, &levels);
        let edges = EdgeSynthesizer::new(&flat, &nodes).synthesize()?;

        let node_ids: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
        for edge in &edges {
            for endpoint in [&edge.source, &edge.target] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(TaskGraphError::MissingEndpoint {
                        edge: edge.id.clone(),
                        node: endpoint.clone(),
                    });
                }
            }
        }

        debug!(nodes = nodes.len(), edges = edges.len(), "graph assembled");

        Ok(Graph::from_parts(nodes, edges))
    }
}

/// Compile a task forest into a positioned graph
pub fn compile(forest: &TaskForest, config: &LayoutConfig) -> Result<Graph, TaskGraphError> {
    GraphAssembler::new(config).assemble(forest)
}
