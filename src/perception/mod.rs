pub mod grid;
pub mod validate;

pub use grid::{Grid, load_lines};
pub use validate::validate;
