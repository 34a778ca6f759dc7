// Full analysis of one diagram.
// lines -> grid -> exterior infill -> validation -> patch discovery
// -> bounding boxes -> stacking. Any error aborts the whole run.

use std::path::Path;
use serde::Serialize;
use crate::core::{BoundingBox, PatchId, Result};
use crate::perception::{Grid, load_lines, validate};
use crate::regions::{Patch, infill_exterior, discover_patches, patch_bounds, canvas_bounds};
use crate::render::{LabelMap, Renderer, Rendering};
use crate::stacking::{Stacking, resolve_stacking};

#[derive(Debug, Clone)]
pub struct Chart {
    pub grid: Grid,
    pub patches: Vec<Patch>,
    pub boxes: Vec<BoundingBox>,
    pub canvas: Option<BoundingBox>,
    pub stacking: Stacking,
}

impl Chart {
    pub fn analyze<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let mut grid = Grid::build(lines)?;

        let exterior = infill_exterior(&mut grid);
        validate(&grid)?;
        let patches = discover_patches(&mut grid);

        let width = grid.width();
        let boxes = patch_bounds(&patches, width)?;
        let canvas = canvas_bounds(&patches, width);
        let stacking = resolve_stacking(&patches, &boxes, width)?;

        log::info!(
            "{}x{} diagram: {} exterior cells, {} patches, {} nesting edges, depth {}",
            grid.width(), grid.height(), exterior, patches.len(),
            stacking.graph.edge_count(), stacking.depth()
        );
        Ok(Self { grid, patches, boxes, canvas, stacking })
    }

    pub fn analyze_text(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        Self::analyze(&lines)
    }

    pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let lines = load_lines(path)?;
        Self::analyze(&lines)
    }

    pub fn patch(&self, id: PatchId) -> Option<&Patch> {
        self.patches.iter().find(|p| p.id == id)
    }

    pub fn bounds(&self, id: PatchId) -> Option<&BoundingBox> {
        self.patches.iter().position(|p| p.id == id).and_then(|k| self.boxes.get(k))
    }

    pub fn layer(&self, id: PatchId) -> Option<usize> {
        self.stacking.layer(id)
    }

    pub fn labels(&self) -> LabelMap {
        LabelMap::from_patches(self.grid.width(), self.grid.height(), &self.patches)
    }

    pub fn render(&self, renderer: &Renderer) -> Rendering {
        renderer.render(&self.labels(), self.patches.len())
    }

    pub fn report(&self) -> ChartReport {
        let patches = self.patches.iter().zip(&self.boxes).map(|(p, b)| PatchReport {
            id: p.id,
            interior: p.interior.len(),
            cells: p.len(),
            bounds: *b,
            layer: self.layer(p.id).unwrap_or(1),
            nested_in: self.stacking.graph.outers(p.id).to_vec(),
        }).collect();

        ChartReport {
            width: self.grid.width(),
            height: self.grid.height(),
            canvas: self.canvas,
            depth: self.stacking.depth(),
            patches,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub id: PatchId,
    pub interior: usize,
    pub cells: usize,
    pub bounds: BoundingBox,
    pub layer: usize,
    pub nested_in: Vec<PatchId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartReport {
    pub width: usize,
    pub height: usize,
    pub canvas: Option<BoundingBox>,
    pub depth: usize,
    pub patches: Vec<PatchReport>,
}

impl ChartReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn print_summary(&self) {
        println!("=== Chart {}x{} ===", self.width, self.height);
        match &self.canvas {
            Some(c) => println!("Canvas: {} | Patches: {} | Depth: {}", c, self.patches.len(), self.depth),
            None => println!("Canvas: none | Patches: 0"),
        }
        for p in &self.patches {
            let nested = if p.nested_in.is_empty() {
                "-".to_string()
            } else {
                p.nested_in.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",")
            };
            println!("  [{}] layer={} interior={} cells={} bounds={} area={} in={}",
                p.id, p.layer, p.interior, p.cells, p.bounds, p.bounds.area(), nested);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ChartError;

    const NESTED: &str = "\
#######
#     #
# ### #
# # # #
# ### #
#     #
#######";

    #[test]
    fn nested_boxes_layer() {
        let chart = Chart::analyze_text(NESTED).unwrap();
        assert_eq!(chart.patches.len(), 2);
        assert_eq!(chart.layer(1), Some(1));
        assert_eq!(chart.layer(2), Some(2));
        assert_eq!(chart.stacking.graph.edge_count(), 1);
        assert!(chart.stacking.graph.has_edge(2, 1));
    }

    #[test]
    fn report_matches_chart() {
        let chart = Chart::analyze_text(NESTED).unwrap();
        let report = chart.report();
        assert_eq!(report.width, 7);
        assert_eq!(report.depth, 2);
        assert_eq!(report.patches[1].nested_in, vec![1]);
        assert_eq!(report.patches[1].interior, 1);
        assert_eq!(report.canvas, Some(BoundingBox::new(0, 0, 6, 6)));
        let json = report.to_json().unwrap();
        assert!(json.contains("\"nested_in\""));
    }

    #[test]
    fn validation_aborts_pipeline() {
        let err = Chart::analyze_text("#####\n#   #\n#####\n  #").unwrap_err();
        assert_eq!(err, ChartError::IncompleteBorder { row: 3, col: 2 });
    }

    #[test]
    fn empty_input() {
        let none: [&str; 0] = [];
        assert!(matches!(Chart::analyze(&none), Err(ChartError::MalformedInput(_))));
    }
}
