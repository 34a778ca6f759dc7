pub mod extract;
pub mod geometry;

pub use extract::{Patch, explore, infill_exterior, discover_patches, extract_patches};
pub use geometry::{bounding_box, coverage, patch_bounds, canvas_bounds};
