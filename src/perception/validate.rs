// Border well-formedness checks.
//
// Two rules, evaluated cell by cell in index order:
// 1. A border cell must touch at least two other border cells (4-connected),
//    otherwise it is a dangling stroke that cannot close a region.
// 2. An empty cell must not sit beside a corner where two border cells meet
//    only diagonally. Only the two forward diagonals (north-west, north-east)
//    are checked; the backward ones are covered from the opposite cell.

use super::grid::Grid;
use crate::core::{CellIndex, ChartError, Result};

pub fn validate(grid: &Grid) -> Result<()> {
    for i in 0..grid.size() {
        check_well_formed(grid, i)?;
    }
    log::debug!("validated {}x{} grid", grid.width(), grid.height());
    Ok(())
}

pub fn check_well_formed(grid: &Grid, i: CellIndex) -> Result<()> {
    let (row, col) = (grid.row(i), grid.col(i));
    if grid.is_occupied(i) {
        if !check_neighbours(grid, i) {
            return Err(ChartError::IncompleteBorder { row, col });
        }
    } else {
        let diagonals = [
            grid.north(i).and_then(|n| grid.west(n)),
            grid.north(i).and_then(|n| grid.east(n)),
        ];
        for j in diagonals.into_iter().flatten() {
            if !check_diagonal(grid, i, j) {
                return Err(ChartError::DiagonalBorder { row, col });
            }
        }
    }
    Ok(())
}

pub fn check_neighbours(grid: &Grid, i: CellIndex) -> bool {
    grid.neighbors4(i).into_iter().filter(|&j| grid.is_occupied(j)).count() >= 2
}

/// False when `i` and its diagonal `j` are both flanked by border cells
/// at the two shared corners while `j` itself is empty.
pub fn check_diagonal(grid: &Grid, i: CellIndex, j: CellIndex) -> bool {
    let ij = grid.index(grid.row(i), grid.col(j));
    let ji = grid.index(grid.row(j), grid.col(i));
    match (ij, ji) {
        (Some(ij), Some(ji)) => !(grid.is_occupied(ij) && grid.is_occupied(ji) && !grid.is_occupied(j)),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_box_is_valid() {
        let g = Grid::from_text("#####\n#   #\n#####").unwrap();
        assert_eq!(validate(&g), Ok(()));
    }

    #[test]
    fn nested_box_is_valid() {
        let g = Grid::from_text("#######\n#     #\n# ### #\n# # # #\n# ### #\n#     #\n#######").unwrap();
        assert_eq!(validate(&g), Ok(()));
    }

    #[test]
    fn dangling_stroke() {
        let g = Grid::from_text("#####\n#   #\n#####\n  #").unwrap();
        assert_eq!(validate(&g), Err(ChartError::IncompleteBorder { row: 3, col: 2 }));
    }

    #[test]
    fn isolated_mark() {
        let g = Grid::from_text("   \n # \n   ").unwrap();
        assert_eq!(validate(&g), Err(ChartError::IncompleteBorder { row: 1, col: 1 }));
    }

    #[test]
    fn corner_to_corner_boxes() {
        let g = Grid::from_text("###\n# #\n###\n   ###\n   # #\n   ###").unwrap();
        assert_eq!(validate(&g), Err(ChartError::DiagonalBorder { row: 3, col: 2 }));
    }

    #[test]
    fn diagonal_with_filled_corner_is_fine() {
        let g = Grid::build(&["## ", "###", " ##"]).unwrap();
        assert!(check_diagonal(&g, 6, 4));
        assert_eq!(validate(&g), Ok(()));
    }

    #[test]
    fn diagonal_rule_direct() {
        // (1,0) and (0,1) are border, (0,0) empty: ambiguous for cell (1,1)
        let g = Grid::build(&[" ##", "#  ", "   "]).unwrap();
        assert!(!check_diagonal(&g, 4, 0));
        assert!(check_diagonal(&g, 4, 2));
    }

    #[test]
    fn top_row_has_no_forward_diagonals() {
        let g = Grid::from_text(" ###\n##  \n#   ").unwrap();
        assert!(check_well_formed(&g, 0).is_ok());
    }
}
