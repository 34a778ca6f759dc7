pub mod graph;
pub mod layers;

pub use graph::ContainmentGraph;
pub use layers::{Stacking, resolve_stacking, resolve_layers, check_mutual, check_acyclic};
