//! Pixel grid primitives: palette colors, cells, and frames.

mod cell;
mod frame;

pub use cell::{Cell, Color};
pub use frame::Frame;
