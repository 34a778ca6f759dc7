use crate::regions::Patch;

/// Per-cell patch label. `0` is background, `k` is patch `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: usize,
    height: usize,
    labels: Vec<usize>,
}

impl LabelMap {
    /// Patches are painted in order, so a later id wins where footprints overlap.
    pub fn from_patches(width: usize, height: usize, patches: &[Patch]) -> Self {
        let mut labels = vec![0; width * height];
        for p in patches {
            for &i in &p.cells {
                if let Some(slot) = labels.get_mut(i) {
                    *slot = p.id;
                }
            }
        }
        Self { width, height, labels }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if col >= self.width { return None; }
        self.labels.get(row * self.width + col).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.labels.chunks(self.width.max(1))
    }

    pub fn max_label(&self) -> usize {
        self.labels.iter().copied().max().unwrap_or(0)
    }
}
