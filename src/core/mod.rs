pub mod error;
pub mod types;

pub use error::{ChartError, Result};
pub use types::{BoundingBox, Cell, CellIndex, ContainmentEdge, PatchId};
