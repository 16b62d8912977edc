//! Isometric tile map editor
//!
//! Grid cells project onto 2:1 screen-space diamonds, filled by the crate's
//! own scanline rasterizer into a software framebuffer. macroquad supplies
//! the window, input polling and the per-frame texture blit - nothing else.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod iso;
mod map;
mod raster;
mod ui;

use macroquad::prelude::*;

use app::{EditorApp, EditorEvent, EditorKey, MouseButton as EditorMouseButton};
use config::EditorConfig;
use map::TileKind;
use raster::Framebuffer;
use ui::draw_overlay;

/// Window (and framebuffer) dimensions
const WINDOW_WIDTH: i32 = 800;
const WINDOW_HEIGHT: i32 = 600;

/// Editor tunables file
const CONFIG_PATH: &str = "assets/editor.ron";
/// Overlay font (optional; the UI degrades to icon glyphs without it)
const FONT_PATH: &str = "assets/fonts/overlay.ttf";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Isometric Map Editor v{}", VERSION),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

/// Map a pressed key to its symbolic editor identity
fn key_event(key: KeyCode) -> Option<EditorKey> {
    match key {
        KeyCode::Escape => Some(EditorKey::Escape),
        KeyCode::H => Some(EditorKey::ToggleHelp),
        KeyCode::Up => Some(EditorKey::PanUp),
        KeyCode::Down => Some(EditorKey::PanDown),
        KeyCode::Left => Some(EditorKey::PanLeft),
        KeyCode::Right => Some(EditorKey::PanRight),
        KeyCode::Equal | KeyCode::KpAdd => Some(EditorKey::ZoomIn),
        KeyCode::Minus | KeyCode::KpSubtract => Some(EditorKey::ZoomOut),
        KeyCode::Key1 => Some(EditorKey::Brush(TileKind::Grass)),
        KeyCode::Key2 => Some(EditorKey::Brush(TileKind::Water)),
        KeyCode::Key3 => Some(EditorKey::Brush(TileKind::Mountain)),
        KeyCode::Key4 => Some(EditorKey::Brush(TileKind::Forest)),
        _ => None,
    }
}

/// Collect this frame's input as discrete editor events
fn poll_events(last_mouse: &mut (f32, f32)) -> Vec<EditorEvent> {
    let mut events = Vec::new();

    if is_quit_requested() {
        events.push(EditorEvent::Quit);
    }

    for key in get_keys_pressed() {
        if let Some(k) = key_event(key) {
            events.push(EditorEvent::KeyDown(k));
        }
    }

    let (mx, my) = mouse_position();
    if (mx, my) != *last_mouse {
        *last_mouse = (mx, my);
        events.push(EditorEvent::MouseMove {
            x: mx as f64,
            y: my as f64,
        });
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        events.push(EditorEvent::MouseDown {
            button: EditorMouseButton::Left,
            x: mx as f64,
            y: my as f64,
        });
    }
    if is_mouse_button_pressed(MouseButton::Right) {
        events.push(EditorEvent::MouseDown {
            button: EditorMouseButton::Right,
            x: mx as f64,
            y: my as f64,
        });
    }

    events
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = EditorConfig::load_or_default(CONFIG_PATH);

    let mut app = match EditorApp::new(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to start editor: {}", e);
            std::process::exit(1);
        }
    };

    // Best-effort: without a font the overlay falls back to icon glyphs
    let font = match load_ttf_font(FONT_PATH).await {
        Ok(font) => {
            println!("Loaded overlay font from {}", FONT_PATH);
            Some(font)
        }
        Err(e) => {
            println!("No overlay font ({}), using icon UI", e);
            None
        }
    };

    let mut fb = Framebuffer::new(WINDOW_WIDTH as usize, WINDOW_HEIGHT as usize);
    let mut last_mouse = mouse_position();

    println!("=== Isometric Map Editor ===");

    while app.running {
        for event in poll_events(&mut last_mouse) {
            app.handle_event(event);
        }

        app.render(&mut fb);

        let texture = Texture2D::from_rgba8(fb.width as u16, fb.height as u16, &fb.pixels);
        texture.set_filter(FilterMode::Nearest);
        draw_texture(&texture, 0.0, 0.0, WHITE);

        draw_overlay(&app, font.as_ref());

        next_frame().await;
    }
}
