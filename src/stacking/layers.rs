// Cycle checks and layer depths over the containment graph.
//
// layer(p) = 1 + max(layer(q) for every edge p -> q), or 1 without edges.
// Layers are only defined on an acyclic graph, so both cycle checks run
// before any depth is computed.

use std::collections::BTreeMap;
use rustc_hash::{FxHashMap, FxHashSet};
use crate::core::{BoundingBox, ChartError, PatchId, Result};
use crate::regions::Patch;
use super::graph::ContainmentGraph;

#[derive(Debug, Clone)]
pub struct Stacking {
    pub graph: ContainmentGraph,
    pub layers: BTreeMap<PatchId, usize>,
}

impl Stacking {
    pub fn layer(&self, id: PatchId) -> Option<usize> {
        self.layers.get(&id).copied()
    }

    pub fn depth(&self) -> usize {
        self.layers.values().copied().max().unwrap_or(0)
    }
}

/// Build the graph, reject cycles, resolve layers.
pub fn resolve_stacking(patches: &[Patch], boxes: &[BoundingBox], width: usize) -> Result<Stacking> {
    let graph = ContainmentGraph::build(patches, boxes, width);
    check_mutual(&graph)?;
    check_acyclic(&graph)?;
    let layers = resolve_layers(&graph)?;
    Ok(Stacking { graph, layers })
}

/// Two patches nested in each other's boxes.
pub fn check_mutual(graph: &ContainmentGraph) -> Result<()> {
    for edge in graph.edges() {
        if graph.has_edge(edge.outer, edge.inner) {
            return Err(ChartError::CircularContainment {
                cycle: vec![edge.inner, edge.outer, edge.inner],
            });
        }
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Depth-first search for a cycle of any length.
pub fn check_acyclic(graph: &ContainmentGraph) -> Result<()> {
    let mut marks: FxHashMap<PatchId, Mark> = FxHashMap::default();

    for &root in graph.nodes() {
        if marks.contains_key(&root) {
            continue;
        }
        // (node, next outgoing edge to follow)
        let mut path: Vec<(PatchId, usize)> = vec![(root, 0)];
        marks.insert(root, Mark::Visiting);

        while let Some(top) = path.last_mut() {
            let node = top.0;
            let outers = graph.outers(node);
            if top.1 < outers.len() {
                let target = outers[top.1];
                top.1 += 1;
                match marks.get(&target) {
                    Some(Mark::Visiting) => {
                        let start = path.iter().position(|&(n, _)| n == target).unwrap_or(0);
                        let mut cycle: Vec<PatchId> = path[start..].iter().map(|&(n, _)| n).collect();
                        cycle.push(target);
                        return Err(ChartError::CircularContainment { cycle });
                    }
                    Some(Mark::Done) => {}
                    None => {
                        marks.insert(target, Mark::Visiting);
                        path.push((target, 0));
                    }
                }
            } else {
                marks.insert(node, Mark::Done);
                path.pop();
            }
        }
    }
    Ok(())
}

/// Longest outward chain per patch, memoized. Fails instead of looping
/// if it meets a patch still on the current path.
pub fn resolve_layers(graph: &ContainmentGraph) -> Result<BTreeMap<PatchId, usize>> {
    let mut layers: BTreeMap<PatchId, usize> = BTreeMap::new();
    let mut visiting: FxHashSet<PatchId> = FxHashSet::default();

    for &id in graph.nodes() {
        layer_of(graph, id, &mut layers, &mut visiting)?;
    }
    Ok(layers)
}

fn layer_of(
    graph: &ContainmentGraph,
    id: PatchId,
    layers: &mut BTreeMap<PatchId, usize>,
    visiting: &mut FxHashSet<PatchId>,
) -> Result<usize> {
    if let Some(&l) = layers.get(&id) {
        return Ok(l);
    }
    if !visiting.insert(id) {
        return Err(ChartError::CircularContainment { cycle: vec![id, id] });
    }
    let mut deepest = 0;
    for &outer in graph.outers(id) {
        deepest = deepest.max(layer_of(graph, outer, layers, visiting)?);
    }
    visiting.remove(&id);
    layers.insert(id, deepest + 1);
    Ok(deepest + 1)
}
