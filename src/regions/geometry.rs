use rustc_hash::FxHashSet;
use crate::core::{BoundingBox, CellIndex, ChartError, Result};
use super::extract::Patch;

/// Minimal rectangle over a set of flat indices on a grid of `width` columns.
pub fn bounding_box<'a, I>(cells: I, width: usize) -> Result<BoundingBox>
where
    I: IntoIterator<Item = &'a CellIndex>,
{
    let mut iter = cells.into_iter();
    let first = *iter.next().ok_or(ChartError::EmptySet)?;
    if width == 0 {
        return Err(ChartError::MalformedInput("zero grid width".into()));
    }
    let (mut xmin, mut ymin) = (first % width, first / width);
    let (mut xmax, mut ymax) = (xmin, ymin);
    for &i in iter {
        let (x, y) = (i % width, i / width);
        xmin = xmin.min(x);
        xmax = xmax.max(x);
        ymin = ymin.min(y);
        ymax = ymax.max(y);
    }
    Ok(BoundingBox::new(xmin, ymin, xmax + 1, ymax + 1))
}

/// Every index inside the rectangle.
pub fn coverage(bbox: &BoundingBox, width: usize) -> FxHashSet<CellIndex> {
    let mut set = FxHashSet::default();
    for row in bbox.ymin..bbox.ymax {
        for col in bbox.xmin..bbox.xmax {
            set.insert(row * width + col);
        }
    }
    set
}

pub fn patch_bounds(patches: &[Patch], width: usize) -> Result<Vec<BoundingBox>> {
    patches.iter().map(|p| bounding_box(&p.cells, width)).collect()
}

/// Rectangle over the union of all patches. `None` without patches.
pub fn canvas_bounds(patches: &[Patch], width: usize) -> Option<BoundingBox> {
    bounding_box(patches.iter().flat_map(|p| p.cells.iter()), width).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn single_cell_box() {
        let b = bounding_box(&[4usize], 3).unwrap();
        assert_eq!(b, BoundingBox::new(1, 1, 2, 2));
        assert_eq!(b.area(), 1);
    }

    #[test]
    fn box_over_scattered_cells() {
        // (0,3), (2,1) on a 5-wide grid
        let b = bounding_box(&[3usize, 11], 5).unwrap();
        assert_eq!(b, BoundingBox::new(1, 0, 4, 3));
        assert_eq!(b.area(), 9);
    }

    #[test]
    fn empty_set_fails() {
        let none: Vec<CellIndex> = Vec::new();
        assert_eq!(bounding_box(&none, 4), Err(ChartError::EmptySet));
    }

    #[test]
    fn coverage_matches_box() {
        let b = BoundingBox::new(1, 1, 3, 3);
        let cov = coverage(&b, 4);
        let expected: FxHashSet<CellIndex> = [5, 6, 9, 10].into_iter().collect();
        assert_eq!(cov, expected);
        assert_eq!(cov.len(), b.area());
    }

    #[test]
    fn box_of_coverage_is_same_box() {
        let cells = [2usize, 9, 13, 20];
        let b = bounding_box(&cells, 6).unwrap();
        let cov = coverage(&b, 6);
        assert_eq!(bounding_box(&cov, 6).unwrap(), b);
        assert!(b.area() >= cells.len());
    }

    #[test]
    fn rectangle_area_equals_count() {
        let cells: BTreeSet<CellIndex> = [0, 1, 2, 5, 6, 7].into_iter().collect();
        let b = bounding_box(&cells, 5).unwrap();
        assert_eq!(b.area(), cells.len());
    }

    #[test]
    fn canvas_spans_all_patches() {
        let a = Patch::new(1, [6usize].into_iter().collect());
        let b = Patch::new(2, [18usize].into_iter().collect());
        let canvas = canvas_bounds(&[a, b], 5).unwrap();
        assert_eq!(canvas, BoundingBox::new(1, 1, 4, 4));
        assert!(canvas_bounds(&[], 5).is_none());
    }
}
