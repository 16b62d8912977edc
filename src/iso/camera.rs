//! Camera pan and zoom on top of the isometric projection

use super::math::Vec2;
use super::projection::Projection;

/// Multiplicative zoom step per zoom-in key event
pub const ZOOM_IN_FACTOR: f64 = 1.1;
/// Multiplicative zoom step per zoom-out key event
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// Smallest zoom the camera will accept, keeping the inverse transform finite
const ZOOM_FLOOR: f64 = 1e-3;

/// Camera state: pixel pan offset plus uniform zoom
///
/// Zoom is private so every mutation goes through the clamp; it can never
/// reach zero or go negative.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pan: Vec2,
    zoom: f64,
    zoom_min: f64,
    zoom_max: f64,
}

impl Camera {
    pub fn new(zoom_min: f64, zoom_max: f64) -> Self {
        // Tolerate a reversed range from the config file
        let (zoom_min, zoom_max) = if zoom_min <= zoom_max {
            (zoom_min, zoom_max)
        } else {
            (zoom_max, zoom_min)
        };
        let zoom_min = zoom_min.max(ZOOM_FLOOR);
        let zoom_max = zoom_max.max(zoom_min);

        Self {
            pan: Vec2::ZERO,
            zoom: 1.0_f64.clamp(zoom_min, zoom_max),
            zoom_min,
            zoom_max,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Multiply the zoom by `factor`, clamped to the configured range
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(self.zoom_min, self.zoom_max);
    }

    /// Shift the view by a pixel offset
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan.x += dx;
        self.pan.y += dy;
    }

    /// Grid to screen with zoom and pan applied (scale, then translate)
    pub fn project(&self, proj: &Projection, grid: Vec2) -> Vec2 {
        proj.to_screen(grid) * self.zoom + self.pan
    }

    /// Exact inverse of [`Camera::project`]
    pub fn unproject(&self, proj: &Projection, screen: Vec2) -> Vec2 {
        proj.to_grid((screen - self.pan) / self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso::ProjectionBasis;

    fn default_projection() -> Projection {
        Projection::new(ProjectionBasis::default(), 32.0, 32.0).unwrap()
    }

    #[test]
    fn test_round_trip_under_camera() {
        let proj = default_projection();
        let pans = [(0.0, 0.0), (100.0, 50.0), (-37.5, 12.25)];
        let zoom_steps = [0, 3, 7]; // zoom-in presses from 1.0

        for &(px, py) in &pans {
            for &steps in &zoom_steps {
                let mut camera = Camera::new(0.5, 2.0);
                camera.pan_by(px, py);
                for _ in 0..steps {
                    camera.zoom_by(ZOOM_IN_FACTOR);
                }

                for gx in -10..=10 {
                    for gy in -10..=10 {
                        let g = Vec2::new(gx as f64, gy as f64);
                        let back = camera.unproject(&proj, camera.project(&proj, g));
                        assert!((back.x - g.x).abs() < 1e-6);
                        assert!((back.y - g.y).abs() < 1e-6);
                    }
                }
            }
        }
    }

    #[test]
    fn test_zoom_saturates_at_max() {
        let mut camera = Camera::new(0.5, 2.0);
        for _ in 0..100 {
            camera.zoom_by(ZOOM_IN_FACTOR);
        }
        assert!((camera.zoom() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_saturates_at_min() {
        let mut camera = Camera::new(0.5, 2.0);
        for _ in 0..100 {
            camera.zoom_by(ZOOM_OUT_FACTOR);
            assert!(camera.zoom() > 0.0);
        }
        assert!((camera.zoom() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_never_reaches_zero() {
        // Even with a nonsense config range the zoom stays positive
        let mut camera = Camera::new(0.0, 2.0);
        for _ in 0..1000 {
            camera.zoom_by(ZOOM_OUT_FACTOR);
        }
        assert!(camera.zoom() > 0.0);
    }

    #[test]
    fn test_pan_point_is_projected_origin() {
        let proj = default_projection();
        let mut camera = Camera::new(0.5, 2.0);
        camera.pan_by(100.0, 50.0);
        camera.zoom_by(100.0); // clamps to 2.0

        let g = camera.unproject(&proj, Vec2::new(100.0, 50.0));
        assert!(g.x.abs() < 1e-9);
        assert!(g.y.abs() < 1e-9);
    }
}
