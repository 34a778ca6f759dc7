use rustc_hash::FxHashMap;
use crate::core::{BoundingBox, ContainmentEdge, PatchId};
use crate::regions::{coverage, Patch};

/// Directed nesting relation between patches. An edge `inner -> outer`
/// says some cell of `inner` lies inside `outer`'s bounding box.
#[derive(Debug, Clone, Default)]
pub struct ContainmentGraph {
    nodes: Vec<PatchId>,
    edges: Vec<ContainmentEdge>,
    outgoing: FxHashMap<PatchId, Vec<PatchId>>,
    incoming: FxHashMap<PatchId, Vec<PatchId>>,
}

impl ContainmentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only patches whose box holds cells they do not own are checked as
    /// outers. `boxes[k]` must belong to `patches[k]`.
    pub fn build(patches: &[Patch], boxes: &[BoundingBox], width: usize) -> Self {
        let mut graph = Self::new();
        for p in patches {
            graph.add_node(p.id);
        }

        for (outer, bbox) in patches.iter().zip(boxes) {
            if bbox.area() == outer.len() {
                continue;
            }
            let covered = coverage(bbox, width);
            for inner in patches {
                if inner.id == outer.id {
                    continue;
                }
                if inner.cells.iter().any(|c| covered.contains(c)) {
                    graph.add_edge(inner.id, outer.id);
                }
            }
        }
        log::debug!("containment graph: {} patches, {} edges", graph.node_count(), graph.edge_count());
        graph
    }

    pub fn add_node(&mut self, id: PatchId) {
        if !self.nodes.contains(&id) {
            self.nodes.push(id);
        }
    }

    pub fn add_edge(&mut self, inner: PatchId, outer: PatchId) {
        let edge = ContainmentEdge { inner, outer };
        if self.edges.contains(&edge) {
            return;
        }
        self.add_node(inner);
        self.add_node(outer);
        self.edges.push(edge);
        self.outgoing.entry(inner).or_default().push(outer);
        self.incoming.entry(outer).or_default().push(inner);
    }

    pub fn nodes(&self) -> &[PatchId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[ContainmentEdge] {
        &self.edges
    }

    /// Patches whose boxes `id` is nested in.
    pub fn outers(&self, id: PatchId) -> &[PatchId] {
        self.outgoing.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Patches nested in `id`'s box.
    pub fn inners(&self, id: PatchId) -> &[PatchId] {
        self.incoming.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_edge(&self, inner: PatchId, outer: PatchId) -> bool {
        self.outers(inner).contains(&outer)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::bounding_box;

    fn patch(id: PatchId, cells: &[usize]) -> Patch {
        Patch::new(id, cells.iter().copied().collect())
    }

    #[test]
    fn edges_indexed_both_ways() {
        let mut g = ContainmentGraph::new();
        g.add_edge(2, 1);
        g.add_edge(3, 1);
        g.add_edge(3, 2);
        g.add_edge(3, 2);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.outers(3), &[1, 2]);
        assert_eq!(g.inners(1), &[2, 3]);
        assert!(g.outers(1).is_empty());
        assert!(g.has_edge(2, 1));
        assert!(!g.has_edge(1, 2));
    }

    #[test]
    fn ring_around_cell_gets_an_edge() {
        // 5x5 grid: ring patch around the centre, centre is its own patch
        let ring = patch(1, &[6, 7, 8, 11, 13, 16, 17, 18]);
        let centre = patch(2, &[12]);
        let patches = vec![ring, centre];
        let boxes: Vec<_> = patches.iter().map(|p| bounding_box(&p.cells, 5).unwrap()).collect();
        let g = ContainmentGraph::build(&patches, &boxes, 5);
        assert_eq!(g.edges(), &[ContainmentEdge { inner: 2, outer: 1 }]);
    }

    #[test]
    fn side_by_side_rectangles_are_unrelated() {
        let left = patch(1, &[0, 1, 5, 6]);
        let right = patch(2, &[3, 4, 8, 9]);
        let patches = vec![left, right];
        let boxes: Vec<_> = patches.iter().map(|p| bounding_box(&p.cells, 5).unwrap()).collect();
        let g = ContainmentGraph::build(&patches, &boxes, 5);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.node_count(), 2);
    }
}
