//! Sparse tile grid and its render pass

use std::collections::HashMap;

use crate::iso::{diamond_vertices, Camera, Projection, Vec2};
use crate::raster::{fill_convex_polygon, Color, Framebuffer};
use super::tiles::{TileKind, TileRecord};

/// Per-channel darkening of a tile's color for its outline
const OUTLINE_DARKEN: u8 = 50;
/// Marker color for the selected cell
const HIGHLIGHT: Color = Color { r: 255, g: 255, b: 0, a: 255 };

/// Sparse isometric tile map
///
/// Absent cells are unpainted and render as nothing. `selected` and `brush`
/// are transient editor state: input handling writes them, the render pass
/// reads them.
pub struct MapGrid {
    width: i32,
    height: i32,
    tiles: HashMap<(i32, i32), TileRecord>,
    pub selected: (i32, i32),
    pub brush: TileKind,
}

impl MapGrid {
    /// Empty map of fixed dimensions; never resized afterwards
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            tiles: HashMap::new(),
            selected: (0, 0),
            brush: TileKind::Grass,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, cell: (i32, i32)) -> bool {
        cell.0 >= 0 && cell.0 < self.width && cell.1 >= 0 && cell.1 < self.height
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Paint a cell with a kind's record; out-of-bounds cells are ignored
    pub fn set_tile(&mut self, cell: (i32, i32), kind: TileKind) {
        if self.in_bounds(cell) {
            self.tiles.insert(cell, kind.record());
        }
    }

    pub fn get_tile(&self, cell: (i32, i32)) -> Option<&TileRecord> {
        self.tiles.get(&cell)
    }

    /// Move the selection; out-of-bounds positions keep the previous one
    pub fn select(&mut self, cell: (i32, i32)) {
        if self.in_bounds(cell) {
            self.selected = cell;
        }
    }

    /// Draw every painted tile, then the selection marker on top.
    ///
    /// Tile iteration order is irrelevant (diamonds of adjacent cells only
    /// share edges); the marker is drawn last so it always wins overlap.
    pub fn render(&self, fb: &mut Framebuffer, proj: &Projection, camera: &Camera) {
        for (&(x, y), record) in &self.tiles {
            let center = camera.project(proj, Vec2::new(x as f64, y as f64));
            render_tile(fb, proj, center, camera.zoom(), record.color, false);
        }

        let (sx, sy) = self.selected;
        let center = camera.project(proj, Vec2::new(sx as f64, sy as f64));
        render_tile(fb, proj, center, camera.zoom(), HIGHLIGHT, true);
    }
}

/// Fill one diamond and outline its four edges.
///
/// This is where fractional coordinates finally truncate to pixels.
fn render_tile(
    fb: &mut Framebuffer,
    proj: &Projection,
    center: Vec2,
    zoom: f64,
    color: Color,
    selected: bool,
) {
    let verts = diamond_vertices(center, proj.tile_width(), proj.tile_height(), zoom);
    fill_convex_polygon(fb, &verts, color);

    let outline = if selected {
        HIGHLIGHT
    } else {
        color.darken(OUTLINE_DARKEN)
    };
    for i in 0..verts.len() {
        let a = verts[i];
        let b = verts[(i + 1) % verts.len()];
        fb.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, outline);
    }
}
