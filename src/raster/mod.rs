//! Software scanline rasterizer
//!
//! Everything the map draws goes through this module: a plain RGBA
//! framebuffer, Bresenham lines for outlines, and a from-scratch scanline
//! fill for convex polygons.

mod color;
mod framebuffer;
mod scanline;

pub use color::*;
pub use framebuffer::*;
pub use scanline::*;
