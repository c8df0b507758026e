mod bounding_box;
mod coordinate;
mod evaluation;

pub use bounding_box::*;
pub use coordinate::*;
pub use evaluation::*;
