//! Diamond tile geometry

use super::math::Vec2;

/// The four corners of a tile diamond at `center`, in top/right/bottom/left
/// order.
///
/// The vertical half-extent is half the horizontal one, which is what gives
/// the 2:1 isometric look. Coordinates stay fractional here; truncation to
/// pixels happens in the rasterizer so rounding error does not compound
/// across transform stages.
pub fn diamond_vertices(center: Vec2, tile_width: f64, tile_height: f64, zoom: f64) -> [Vec2; 4] {
    let half_w = tile_width * zoom / 2.0;
    let half_h = tile_height * zoom / 4.0;

    [
        Vec2::new(center.x, center.y - half_h),
        Vec2::new(center.x + half_w, center.y),
        Vec2::new(center.x, center.y + half_h),
        Vec2::new(center.x - half_w, center.y),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diamond_extents() {
        let [top, right, bottom, left] = diamond_vertices(Vec2::new(100.0, 80.0), 32.0, 32.0, 1.0);
        assert!((top.y - 72.0).abs() < 1e-12);
        assert!((right.x - 116.0).abs() < 1e-12);
        assert!((bottom.y - 88.0).abs() < 1e-12);
        assert!((left.x - 84.0).abs() < 1e-12);
        // 2:1 aspect: horizontal extent is twice the vertical one
        assert!(((right.x - left.x) - 2.0 * (bottom.y - top.y)).abs() < 1e-12);
    }

    #[test]
    fn test_diamond_scales_with_zoom() {
        let [_, right, _, left] = diamond_vertices(Vec2::ZERO, 32.0, 32.0, 2.0);
        assert!((right.x - 32.0).abs() < 1e-12);
        assert!((left.x + 32.0).abs() < 1e-12);
    }
}
