//! Deterministic placement of task nodes
//!
//! Every task owns a horizontal slot span as wide as the widest row of its
//! subtree, measured in `sibling_spacing` units. Root tasks form bands by
//! dependency level; the spans of a band's roots are laid side by side and
//! centred on the configured canvas width. Subtasks hang one row below their
//! parent, their spans packed in declaration order and centred under it, so
//! no two nodes in a row sit closer than one `sibling_spacing`. A root band
//! starts below the deepest subtask row of the band above it.

use std::collections::BTreeMap;

use tracing::debug;

use super::levels::Levels;
use super::types::{Node, NodeData, Position};
use crate::config::LayoutConfig;
use crate::core::FlatForest;

pub struct LayoutEngine<'c> {
    config: &'c LayoutConfig,
}

impl<'c> LayoutEngine<'c> {
    pub fn new(config: &'c LayoutConfig) -> Self {
        Self { config }
    }

    fn row_y(&self, row: usize) -> f64 {
        row as f64 * self.config.level_spacing
    }

    /// Left edge of the first slot of a band `total_slots` wide
    fn band_start(&self, total_slots: usize) -> f64 {
        let extent = total_slots.saturating_sub(1) as f64 * self.config.sibling_spacing
            + self.config.node_width;
        (self.config.canvas_width - extent) / 2.0
    }

    /// Place every task; the result is indexed by flat position
    pub fn layout(&self, forest: &FlatForest<'_>, levels: &Levels) -> Vec<Node> {
        let entries = forest.entries();
        let spacing = self.config.sibling_spacing;

        // Top-level ancestor of each entry; parents precede children
        let mut root_of = Vec::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            let root = entry.parent.map_or(position, |parent| root_of[parent]);
            root_of.push(root);
        }

        let mut subtree_height = vec![0usize; entries.len()];
        for (position, entry) in entries.iter().enumerate() {
            let root = root_of[position];
            subtree_height[root] = subtree_height[root].max(entry.nesting);
        }

        // Slot widths, children first; `child_slots` is the packed width of
        // a parent's direct subtasks
        let mut slots = vec![1usize; entries.len()];
        let mut child_slots = vec![0usize; entries.len()];
        for position in (0..entries.len()).rev() {
            slots[position] = child_slots[position].max(1);
            if let Some(parent) = entries[position].parent {
                child_slots[parent] += slots[position];
            }
        }

        let mut bands: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (position, entry) in entries.iter().enumerate() {
            if entry.parent.is_none() {
                bands.entry(levels.get(position)).or_default().push(position);
            }
        }

        let mut rows = vec![0usize; entries.len()];
        let mut xs = vec![0.0f64; entries.len()];
        let mut next_row = 0;

        for members in bands.values() {
            let band_row = next_row;
            let total: usize = members.iter().map(|&position| slots[position]).sum();
            let start = self.band_start(total);

            let mut cursor = 0usize;
            for &position in members {
                let centre = cursor as f64 + slots[position] as f64 / 2.0 - 0.5;
                rows[position] = band_row;
                xs[position] = start + centre * spacing;
                cursor += slots[position];
            }

            let deepest = members
                .iter()
                .map(|&position| subtree_height[position])
                .max()
                .unwrap_or(0);
            next_row = band_row + deepest + 1;
        }

        // Pre-order visits siblings in declaration order, after their parent
        let mut cursors = vec![0usize; entries.len()];
        for (position, entry) in entries.iter().enumerate() {
            if let Some(parent) = entry.parent {
                let offset = cursors[parent] as f64 + slots[position] as f64 / 2.0
                    - child_slots[parent] as f64 / 2.0;
                cursors[parent] += slots[position];

                rows[position] = rows[parent] + 1;
                xs[position] = xs[parent] + offset * spacing;
            }
        }

        debug!(
            nodes = entries.len(),
            bands = bands.len(),
            rows = next_row,
            max_level = levels.max_level(),
            "layout computed"
        );

        entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let task = entry.task;
                Node {
                    id: task.id.node_id(),
                    task_id: Some(task.id.clone()),
                    depth: rows[position],
                    level: levels.get(position),
                    position: Position::new(xs[position], self.row_y(rows[position])),
                    is_child: entry.is_child(),
                    has_children: task.has_subtasks(),
                    ad_hoc: false,
                    ingests: task.ingests.clone(),
                    produces: task.produces.clone(),
                    data: NodeData {
                        name: task.name.clone(),
                        description: task.description.clone(),
                        completed: task.completed,
                    },
                }
            })
            .collect()
    }
}
