//! Scanline polygon fill
//!
//! Convex polygons are fan-triangulated from their first vertex, and each
//! triangle is filled by splitting at its middle vertex's row into a
//! flat-top and a flat-bottom half. Both halves walk their two edges one
//! pixel row at a time, emitting a horizontal span per row. No filled
//! polygon primitive from the windowing layer is involved.

use crate::iso::Vec2;
use super::color::Color;
use super::framebuffer::Framebuffer;

/// Fill a convex polygon by fanning triangles out of `vertices[0]`.
///
/// Correct for convex vertex loops only (the tile diamond qualifies).
/// Fewer than 3 vertices is a silent no-op.
pub fn fill_convex_polygon(fb: &mut Framebuffer, vertices: &[Vec2], color: Color) {
    if vertices.len() < 3 {
        return;
    }
    for i in 1..vertices.len() - 1 {
        fill_triangle(fb, vertices[0], vertices[i], vertices[i + 1], color);
    }
}

/// Fill a triangle with horizontal spans.
///
/// Vertices are sorted by ascending y (stable, so exactly-equal rows keep
/// their argument order), rows truncate to integers, and each half of the
/// triangle interpolates its left and right edge x per row. Degenerate
/// input (shared rows, zero area) draws little or nothing and never panics.
pub fn fill_triangle(fb: &mut Framebuffer, p1: Vec2, p2: Vec2, p3: Vec2, color: Color) {
    let mut pts = [p1, p2, p3];
    pts.sort_by(|a, b| a.y.total_cmp(&b.y));

    let y_min = pts[0].y as i32;
    let y_mid = pts[1].y as i32;
    let y_max = pts[2].y as i32;

    // Flat-bottom half: rows [y_min, y_mid), both edges leave the top vertex
    if y_min < y_mid {
        let dx1 = edge_slope(pts[1].x - pts[0].x, (y_mid - y_min) as f64);
        let dx2 = edge_slope(pts[2].x - pts[0].x, (y_max - y_min) as f64);

        let mut x1 = pts[0].x;
        let mut x2 = pts[0].x;
        for y in y_min..y_mid {
            fb.draw_hspan(y, x1 as i32, x2 as i32, color);
            x1 += dx1;
            x2 += dx2;
        }
    }

    // Flat-top half: rows [y_mid, y_max); the long edge resumes where the
    // first half left it
    if y_mid < y_max {
        let dx1 = edge_slope(pts[2].x - pts[1].x, (y_max - y_mid) as f64);
        let dx2 = edge_slope(pts[2].x - pts[0].x, (y_max - y_min) as f64);

        let mut x1 = pts[1].x;
        let mut x2 = pts[0].x + dx2 * (y_mid - y_min) as f64;
        for y in y_mid..y_max {
            fb.draw_hspan(y, x1 as i32, x2 as i32, color);
            x1 += dx1;
            x2 += dx2;
        }
    }
}

/// Per-row x step of an edge; a zero-height edge contributes no step
fn edge_slope(dx: f64, dy: f64) -> f64 {
    if dy != 0.0 {
        dx / dy
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inclusive x extent of painted pixels in one row, if any
    fn row_span(fb: &Framebuffer, y: usize) -> Option<(usize, usize)> {
        let painted: Vec<usize> = (0..fb.width)
            .filter(|&x| fb.get_pixel(x, y) == Color::WHITE)
            .collect();
        painted.first().map(|&lo| (lo, *painted.last().unwrap()))
    }

    fn painted_count(fb: &Framebuffer) -> usize {
        (0..fb.height)
            .flat_map(|y| (0..fb.width).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get_pixel(x, y) == Color::WHITE)
            .count()
    }

    #[test]
    fn test_reference_triangle_coverage() {
        let mut fb = Framebuffer::new(16, 16);
        fill_triangle(
            &mut fb,
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 10.0),
            Color::WHITE,
        );

        for y in 0..=9usize {
            let (lo, hi) = row_span(&fb, y).expect("row should have a span");
            // Contiguous: one span per row
            for x in lo..=hi {
                assert_eq!(fb.get_pixel(x, y), Color::WHITE);
            }
            // Within the triangle's horizontal extent at this row, +/- 1 px
            let extent_lo = y as f64 * 0.5;
            let extent_hi = 10.0 - y as f64 * 0.5;
            assert!(lo as f64 >= extent_lo - 1.0, "row {} starts at {}", y, lo);
            assert!(hi as f64 <= extent_hi + 1.0, "row {} ends at {}", y, hi);
        }
        // Nothing below the apex row
        for y in 10..16usize {
            assert!(row_span(&fb, y).is_none());
        }
    }

    #[test]
    fn test_collinear_triangle_is_bounded() {
        let mut fb = Framebuffer::new(16, 16);
        fill_triangle(
            &mut fb,
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(10.0, 10.0),
            Color::WHITE,
        );
        // A zero-area triangle may trace its edges but no more
        assert!(painted_count(&fb) <= 20);
    }

    #[test]
    fn test_coincident_points_do_not_panic() {
        let mut fb = Framebuffer::new(8, 8);
        let p = Vec2::new(3.0, 3.0);
        fill_triangle(&mut fb, p, p, p, Color::WHITE);
        assert!(painted_count(&fb) <= 1);
    }

    #[test]
    fn test_shared_row_vertices() {
        let mut fb = Framebuffer::new(16, 16);
        // Flat-bottom triangle: two vertices on the same row
        fill_triangle(
            &mut fb,
            Vec2::new(5.0, 0.0),
            Vec2::new(0.0, 8.0),
            Vec2::new(10.0, 8.0),
            Color::WHITE,
        );
        assert!(row_span(&fb, 0).is_some());
        assert!(row_span(&fb, 7).is_some());
    }

    #[test]
    fn test_polygon_needs_three_vertices() {
        let mut fb = Framebuffer::new(8, 8);
        fill_convex_polygon(&mut fb, &[], Color::WHITE);
        fill_convex_polygon(&mut fb, &[Vec2::new(1.0, 1.0)], Color::WHITE);
        fill_convex_polygon(
            &mut fb,
            &[Vec2::new(1.0, 1.0), Vec2::new(5.0, 5.0)],
            Color::WHITE,
        );
        assert_eq!(painted_count(&fb), 0);
    }

    #[test]
    fn test_diamond_fan_fills_both_halves() {
        let mut fb = Framebuffer::new(32, 32);
        let verts = [
            Vec2::new(16.0, 8.0),  // top
            Vec2::new(24.0, 16.0), // right
            Vec2::new(16.0, 24.0), // bottom
            Vec2::new(8.0, 16.0),  // left
        ];
        fill_convex_polygon(&mut fb, &verts, Color::WHITE);

        // Pixels on both sides of the fan diagonal
        assert_eq!(fb.get_pixel(18, 12), Color::WHITE);
        assert_eq!(fb.get_pixel(14, 20), Color::WHITE);
        // Wholly outside the diamond's bounding box stays untouched
        assert!(row_span(&fb, 4).is_none());
        assert!(row_span(&fb, 28).is_none());
    }
}
