use std::path::Path;
use crate::core::{Cell, CellIndex, ChartError, Result};

/// Rectangular cell map of a text diagram. Space is empty, any other
/// character is border. Short lines are padded with empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn build<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        if lines.is_empty() {
            return Err(ChartError::MalformedInput("no lines in diagram".into()));
        }
        let width = lines.iter().map(|l| l.as_ref().chars().count()).max().unwrap_or(0);
        if width == 0 {
            return Err(ChartError::MalformedInput("diagram has zero width".into()));
        }
        let height = lines.len();

        let mut cells = vec![Cell::empty(); width * height];
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.as_ref().chars().enumerate() {
                if ch != ' ' {
                    cells[row * width + col] = Cell::border();
                }
            }
        }
        Ok(Self { width, height, cells })
    }

    pub fn from_text(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        Self::build(&lines)
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn size(&self) -> usize { self.cells.len() }

    pub fn row(&self, i: CellIndex) -> usize { i / self.width }
    pub fn col(&self, i: CellIndex) -> usize { i % self.width }

    pub fn index(&self, row: usize, col: usize) -> Option<CellIndex> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    pub fn cell(&self, i: CellIndex) -> Option<&Cell> {
        self.cells.get(i)
    }

    /// Out-of-range indices read as empty.
    pub fn is_occupied(&self, i: CellIndex) -> bool {
        self.cells.get(i).map(|c| c.occupied).unwrap_or(false)
    }

    pub fn is_visited(&self, i: CellIndex) -> bool {
        self.cells.get(i).map(|c| c.visited).unwrap_or(false)
    }

    pub fn mark_visited(&mut self, i: CellIndex) {
        if let Some(cell) = self.cells.get_mut(i) {
            cell.visited = true;
        }
    }

    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }

    pub fn west(&self, i: CellIndex) -> Option<CellIndex> {
        if i < self.size() && self.col(i) > 0 { Some(i - 1) } else { None }
    }

    pub fn east(&self, i: CellIndex) -> Option<CellIndex> {
        if i < self.size() && self.col(i) + 1 < self.width { Some(i + 1) } else { None }
    }

    pub fn north(&self, i: CellIndex) -> Option<CellIndex> {
        if i < self.size() && self.row(i) > 0 { Some(i - self.width) } else { None }
    }

    pub fn south(&self, i: CellIndex) -> Option<CellIndex> {
        if i < self.size() && self.row(i) + 1 < self.height { Some(i + self.width) } else { None }
    }

    /// In-bounds 4-neighbours in west, east, north, south order.
    pub fn neighbors4(&self, i: CellIndex) -> Vec<CellIndex> {
        [self.west(i), self.east(i), self.north(i), self.south(i)]
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn is_on_border_of_canvas(&self, i: CellIndex) -> bool {
        if i >= self.size() { return false; }
        let (r, c) = (self.row(i), self.col(i));
        r == 0 || r + 1 == self.height || c == 0 || c + 1 == self.width
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.occupied).count()
    }
}

/// Read a diagram source into lines, terminators stripped.
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ChartError::MalformedInput(format!("cannot read {}: {}", path.display(), e))
    })?;
    Ok(content.lines().map(str::to_string).collect())
}
