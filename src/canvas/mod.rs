//! Canvas module - the raster surface, brush state, and color history.

mod brush;
mod buffer;
mod history;
mod surface;

pub use brush::*;
pub use buffer::*;
pub use history::*;
pub use surface::*;
