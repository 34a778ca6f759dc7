pub mod labels;
pub mod palette;

pub use labels::LabelMap;
pub use palette::{RenderConfig, Renderer, Rendering, TOO_MANY_PATCHES};
