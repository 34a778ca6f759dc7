pub mod runner;

pub use runner::{Chart, ChartReport, PatchReport};
