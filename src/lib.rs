pub mod core;
pub mod perception;
pub mod regions;
pub mod stacking;
pub mod render;
pub mod chart;

pub use crate::chart::{Chart, ChartReport};
pub use crate::core::{ChartError, Result};
