//! Grid to screen isometric transform and its exact inverse
//!
//! One step along a grid axis moves by a screen-space basis vector scaled by
//! half the tile size. The reverse direction is the closed-form inverse of
//! the resulting 2x2 matrix, so hit-testing lands on exactly the cell that
//! was projected.

use serde::{Serialize, Deserialize};
use super::math::Vec2;

/// Determinants below this are treated as singular
const DET_EPSILON: f64 = 1e-12;

/// Screen-space basis vectors for one step along each grid axis
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionBasis {
    pub i_x: f64,
    pub i_y: f64,
    pub j_x: f64,
    pub j_y: f64,
}

impl Default for ProjectionBasis {
    /// Classic 2:1 isometric basis: +x runs down-right, +y runs down-left
    fn default() -> Self {
        Self {
            i_x: 1.0,
            i_y: 0.5,
            j_x: -1.0,
            j_y: 0.5,
        }
    }
}

/// Error type for projection construction
#[derive(Debug)]
pub enum ProjectionError {
    /// Basis vectors are (near) parallel; the transform has no inverse
    DegenerateBasis { det: f64 },
}

impl std::fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionError::DegenerateBasis { det } => {
                write!(f, "degenerate projection basis (det = {})", det)
            }
        }
    }
}

impl std::error::Error for ProjectionError {}

/// Grid <-> screen projection with its precomputed inverse
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    tile_width: f64,
    tile_height: f64,
    // Forward matrix [[a, b], [c, d]] and inverse [[ia, ib], [ic, id]]
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    ia: f64,
    ib: f64,
    ic: f64,
    id: f64,
}

impl Projection {
    /// Build the projection for a tile size, rejecting a singular basis
    pub fn new(
        basis: ProjectionBasis,
        tile_width: f64,
        tile_height: f64,
    ) -> Result<Self, ProjectionError> {
        let a = basis.i_x * 0.5 * tile_width;
        let b = basis.j_x * 0.5 * tile_width;
        let c = basis.i_y * 0.5 * tile_height;
        let d = basis.j_y * 0.5 * tile_height;

        let det = a * d - b * c;
        if det.abs() < DET_EPSILON {
            return Err(ProjectionError::DegenerateBasis { det });
        }

        let inv_det = 1.0 / det;
        Ok(Self {
            tile_width,
            tile_height,
            a,
            b,
            c,
            d,
            ia: inv_det * d,
            ib: inv_det * -b,
            ic: inv_det * -c,
            id: inv_det * a,
        })
    }

    pub fn tile_width(&self) -> f64 {
        self.tile_width
    }

    pub fn tile_height(&self) -> f64 {
        self.tile_height
    }

    /// Project a (possibly fractional) grid coordinate to screen space
    pub fn to_screen(&self, grid: Vec2) -> Vec2 {
        Vec2 {
            x: grid.x * self.a + grid.y * self.b,
            y: grid.x * self.c + grid.y * self.d,
        }
    }

    /// Screen space back to fractional grid units
    pub fn to_grid(&self, screen: Vec2) -> Vec2 {
        Vec2 {
            x: screen.x * self.ia + screen.y * self.ib,
            y: screen.x * self.ic + screen.y * self.id,
        }
    }
}
