// Patch extraction: 4-connected flood fill over empty cells.
//
// Runs in two phases sharing the grid's visited overlay:
// 1. Exterior infill from every empty cell on the canvas edge. Those cells
//    are marked visited and dropped.
// 2. Patch discovery in ascending index order over the remaining empty cells.
//    Each fill becomes a Patch with the next 1-based id.
//
// A discovered patch is then expanded by its west and north strokes so that
// its cell set covers the drawn box footprint, not just the interior.

use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};
use crate::core::{CellIndex, PatchId};
use crate::perception::Grid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub id: PatchId,
    /// Enclosed empty cells, as found by the flood fill.
    pub interior: BTreeSet<CellIndex>,
    /// Interior plus its left and top border strokes.
    pub cells: BTreeSet<CellIndex>,
}

impl Patch {
    pub fn new(id: PatchId, interior: BTreeSet<CellIndex>) -> Self {
        let cells = interior.clone();
        Self { id, interior, cells }
    }

    /// Add the west neighbour of every interior cell, then the north
    /// neighbour of every cell in the widened set. Column 0 and row 0
    /// contribute nothing.
    pub fn expand(&mut self, grid: &Grid) {
        let west: Vec<CellIndex> = self.interior.iter().filter_map(|&i| grid.west(i)).collect();
        self.cells.extend(west);
        let north: Vec<CellIndex> = self.cells.iter().filter_map(|&i| grid.north(i)).collect();
        self.cells.extend(north);
    }

    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    pub fn contains(&self, i: CellIndex) -> bool {
        self.cells.contains(&i)
    }
}

/// Flood fill from `start`. Skips occupied and already visited cells,
/// marks every collected cell visited.
pub fn explore(grid: &mut Grid, start: CellIndex) -> BTreeSet<CellIndex> {
    let mut region = BTreeSet::new();
    let mut stack = vec![start];

    while let Some(i) = stack.pop() {
        if i >= grid.size() || grid.is_occupied(i) || grid.is_visited(i) {
            continue;
        }
        grid.mark_visited(i);
        region.insert(i);
        stack.extend(grid.neighbors4(i));
    }
    region
}

/// Mark every empty region reachable from the canvas edge. Returns the
/// number of cells removed from consideration.
pub fn infill_exterior(grid: &mut Grid) -> usize {
    let mut filled = 0;
    for i in 0..grid.size() {
        if grid.is_on_border_of_canvas(i) && !grid.is_occupied(i) && !grid.is_visited(i) {
            filled += explore(grid, i).len();
        }
    }
    log::debug!("exterior infill covered {} cells", filled);
    filled
}

/// Collect the enclosed regions left after `infill_exterior`, expanded.
pub fn discover_patches(grid: &mut Grid) -> Vec<Patch> {
    let mut patches = Vec::new();
    for i in 0..grid.size() {
        if grid.is_occupied(i) || grid.is_visited(i) {
            continue;
        }
        let interior = explore(grid, i);
        if interior.is_empty() {
            continue;
        }
        let mut patch = Patch::new(patches.len() + 1, interior);
        patch.expand(grid);
        patches.push(patch);
    }
    log::debug!("discovered {} patches", patches.len());
    patches
}

/// Both phases from a clean overlay.
pub fn extract_patches(grid: &mut Grid) -> Vec<Patch> {
    grid.reset_visited();
    infill_exterior(grid);
    discover_patches(grid)
}
