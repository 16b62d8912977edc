//! Editor core: event handling and the per-frame step
//!
//! Windowing-free on purpose: the host loop translates real input into
//! `EditorEvent`s and presents the framebuffer this core draws into, so the
//! whole editor can be driven (and tested) without a window.

use crate::config::EditorConfig;
use crate::iso::{Camera, Projection, ProjectionError, Vec2, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::map::{MapGrid, TileKind};
use crate::raster::{Color, Framebuffer};

/// Mouse buttons the editor distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Symbolic key identities; the window layer maps raw key codes to these
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Escape,
    ToggleHelp,
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
    Brush(TileKind),
}

/// One discrete input event delivered by the host loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    Quit,
    KeyDown(EditorKey),
    MouseDown { button: MouseButton, x: f64, y: f64 },
    MouseMove { x: f64, y: f64 },
}

/// Editor state, stepped once per frame by the host loop
pub struct EditorApp {
    pub map: MapGrid,
    pub camera: Camera,
    pub projection: Projection,
    pub show_help: bool,
    pub running: bool,
    pan_step: f64,
    background: Color,
}

impl EditorApp {
    /// Build the editor from config. A degenerate projection basis is the
    /// one fatal configuration error and surfaces here.
    pub fn new(config: &EditorConfig) -> Result<Self, ProjectionError> {
        let projection = Projection::new(config.basis, config.tile_width, config.tile_height)?;

        let mut map = MapGrid::new(config.map_width, config.map_height);
        seed_map(&mut map);

        let (r, g, b) = config.background;
        Ok(Self {
            map,
            camera: Camera::new(config.zoom_min, config.zoom_max),
            projection,
            show_help: false,
            running: true,
            pan_step: config.pan_step,
            background: Color::new(r, g, b),
        })
    }

    /// Handle one input event. Effects are contained per event; nothing
    /// here can corrupt state for later events.
    pub fn handle_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::Quit => self.running = false,
            EditorEvent::KeyDown(key) => self.handle_key(key),
            EditorEvent::MouseDown { button: MouseButton::Left, x, y } => self.paint_at(x, y),
            EditorEvent::MouseDown { .. } => {}
            EditorEvent::MouseMove { x, y } => {
                // Out-of-bounds cells are rejected by select, keeping the
                // previous selection
                self.map.select(self.cell_at(x, y));
            }
        }
    }

    fn handle_key(&mut self, key: EditorKey) {
        match key {
            EditorKey::Escape => self.running = false,
            EditorKey::ToggleHelp => self.show_help = !self.show_help,
            EditorKey::PanUp => self.camera.pan_by(0.0, -self.pan_step),
            EditorKey::PanDown => self.camera.pan_by(0.0, self.pan_step),
            EditorKey::PanLeft => self.camera.pan_by(-self.pan_step, 0.0),
            EditorKey::PanRight => self.camera.pan_by(self.pan_step, 0.0),
            EditorKey::ZoomIn => self.camera.zoom_by(ZOOM_IN_FACTOR),
            EditorKey::ZoomOut => self.camera.zoom_by(ZOOM_OUT_FACTOR),
            EditorKey::Brush(kind) => self.map.brush = kind,
        }
    }

    /// Screen position to integer grid cell (truncation toward zero)
    fn cell_at(&self, x: f64, y: f64) -> (i32, i32) {
        let grid = self.camera.unproject(&self.projection, Vec2::new(x, y));
        (grid.x as i32, grid.y as i32)
    }

    fn paint_at(&mut self, x: f64, y: f64) {
        let cell = self.cell_at(x, y);
        if self.map.in_bounds(cell) {
            println!("Placed {} at ({}, {})", self.map.brush.label(), cell.0, cell.1);
            self.map.set_tile(cell, self.map.brush);
        } else {
            println!("Click outside the map at ({}, {})", cell.0, cell.1);
        }
    }

    /// Draw the current frame into the framebuffer
    pub fn render(&self, fb: &mut Framebuffer) {
        fb.clear(self.background);
        self.map.render(fb, &self.projection, &self.camera);
    }
}

/// Starting map: thirds of the grid as water, grass and forest columns
fn seed_map(map: &mut MapGrid) {
    let third = map.width() / 3;
    for x in 0..map.width() {
        let kind = if x < third {
            TileKind::Water
        } else if x < third * 2 {
            TileKind::Grass
        } else {
            TileKind::Forest
        };
        for y in 0..map.height() {
            map.set_tile((x, y), kind);
        }
    }
}
