//! Isometric grid <-> screen mapping
//!
//! The editor's logical grid projects onto skewed screen-space diamonds:
//! - Affine transform with an exact closed-form inverse
//! - Camera pan/zoom composed on top, with the matching inverse
//! - Diamond vertex geometry for one tile

mod math;
mod projection;
mod camera;
mod geometry;

pub use math::*;
pub use projection::*;
pub use camera::*;
pub use geometry::*;
