use std::fmt;
use serde::{Serialize, Deserialize};

/// Flat grid position, `row * width + col`.
pub type CellIndex = usize;

/// 1-based patch id, assigned in discovery order.
pub type PatchId = usize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Non-space character in the drawing.
    pub occupied: bool,
    /// Flood-fill overlay, cleared by `Grid::reset_visited`.
    pub visited: bool,
}

impl Cell {
    pub fn border() -> Self {
        Self { occupied: true, visited: false }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Axis-aligned rectangle over grid columns (x) and rows (y). Maxima are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: usize,
    pub ymin: usize,
    pub xmax: usize,
    pub ymax: usize,
}

impl BoundingBox {
    pub fn new(xmin: usize, ymin: usize, xmax: usize, ymax: usize) -> Self {
        debug_assert!(xmin < xmax && ymin < ymax);
        Self { xmin, ymin, xmax, ymax }
    }

    pub fn width(&self) -> usize { self.xmax - self.xmin }
    pub fn height(&self) -> usize { self.ymax - self.ymin }
    pub fn area(&self) -> usize { self.width() * self.height() }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.ymin && row < self.ymax && col >= self.xmin && col < self.xmax
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}) x [{}..{})", self.xmin, self.xmax, self.ymin, self.ymax)
    }
}

/// `inner` has cells inside the full coverage of `outer`'s bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainmentEdge {
    pub inner: PatchId,
    pub outer: PatchId,
}

impl fmt::Display for ContainmentEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.inner, self.outer)
    }
}
