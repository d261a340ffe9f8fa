//! Longest-path layering over the task dependency DAG

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, trace};

use crate::core::FlatForest;
use crate::error::TaskGraphError;

/// Dependency level of every task, indexed by flat position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Levels {
    levels: Vec<usize>,
}

impl Levels {
    pub fn get(&self, position: usize) -> usize {
        self.levels[position]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.levels
    }

    pub fn max_level(&self) -> Option<usize> {
        self.levels.iter().copied().max()
    }
}

/// Assigns each task `max(level(dep)) + 1`, with dependency-free tasks at 0
pub struct LevelAssigner<'f, 'a> {
    forest: &'f FlatForest<'a>,
}

impl<'f, 'a> LevelAssigner<'f, 'a> {
    pub fn new(forest: &'f FlatForest<'a>) -> Self {
        Self { forest }
    }

    /// Resolve every dependency id to a flat position
    fn resolve_dependencies(&self) -> Result<Vec<Vec<usize>>, TaskGraphError> {
        self.forest
            .entries()
            .iter()
            .map(|entry| {
                entry
                    .task
                    .dependencies
                    .iter()
                    .map(|dep| {
                        self.forest.position_of(dep).ok_or_else(|| {
                            TaskGraphError::DanglingDependency {
                                task: entry.task.id.to_string(),
                                dependency: dep.to_string(),
                            }
                        })
                    })
                    .collect()
            })
            .collect()
    }

    pub fn assign(&self) -> Result<Levels, TaskGraphError> {
        let dependencies = self.resolve_dependencies()?;
        let task_count = self.forest.len();
        let mut levels = vec![0usize; task_count];

        // Each sweep fixes every task whose longest dependency chain is one
        // longer, so an acyclic forest settles within `task_count` sweeps.
        for sweep in 1..=task_count {
            let mut changed = false;

            for (position, deps) in dependencies.iter().enumerate() {
                let Some(deepest) = deps.iter().map(|&dep| levels[dep]).max() else {
                    continue;
                };

                if levels[position] != deepest + 1 {
                    levels[position] = deepest + 1;
                    changed = true;
                }
            }

            trace!(sweep, changed, "level relaxation sweep");

            if !changed {
                let levels = Levels { levels };
                debug!(
                    tasks = task_count,
                    sweeps = sweep,
                    max_level = levels.max_level(),
                    "levels assigned"
                );
                return Ok(levels);
            }
        }

        if task_count == 0 {
            return Ok(Levels { levels });
        }

        Err(TaskGraphError::CycleDetected {
            tasks: self.cycle_members(&dependencies),
        })
    }

    /// Ids of the tasks taking part in the first dependency cycle found
    fn cycle_members(&self, dependencies: &[Vec<usize>]) -> Vec<String> {
        let mut graph: DiGraph<usize, ()> = DiGraph::new();
        let indices: Vec<NodeIndex> = (0..dependencies.len())
            .map(|position| graph.add_node(position))
            .collect();

        for (position, deps) in dependencies.iter().enumerate() {
            for &dep in deps {
                graph.add_edge(indices[dep], indices[position], ());
            }
        }

        let component = tarjan_scc(&graph).into_iter().find(|scc| {
            scc.len() > 1 || scc.iter().any(|&idx| graph.contains_edge(idx, idx))
        });

        let mut members: Vec<usize> = component
            .unwrap_or_default()
            .into_iter()
            .map(|idx| graph[idx])
            .collect();
        members.sort_unstable();

        members
            .into_iter()
            .filter_map(|position| self.forest.get(position))
            .map(|entry| entry.task.id.to_string())
            .collect()
    }
}
