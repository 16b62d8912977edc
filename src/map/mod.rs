//! Sparse map grid store
//!
//! Cells are keyed by integer grid coordinates; a fixed closed set of tile
//! kinds supplies the colors.

mod tiles;
mod grid;

pub use tiles::*;
pub use grid::*;
