//! Status and help overlay
//!
//! Text when a font is available. Without one (no loadable TTF on disk) the
//! overlay degrades to a brush swatch and line-drawn key glyphs instead of
//! crashing or going blank.

use macroquad::prelude::*;
use crate::app::EditorApp;

/// Help lines shown while toggled on
const HELP_LINES: [&str; 7] = [
    "Help:",
    "Arrow Keys: Move View",
    "+/-: Zoom",
    "1-4: Select Tile Type",
    "H: Show/Hide Help",
    "Mouse: Select and Place Tiles",
    "ESC: Exit",
];

const TEXT_SIZE: u16 = 20;
const TEXT_COLOR: Color = BLACK;

/// Draw the overlay for this frame
pub fn draw_overlay(app: &EditorApp, font: Option<&Font>) {
    if font.is_some() {
        draw_text_overlay(app, font);
    } else {
        draw_fallback_overlay(app);
    }
}

fn draw_text_overlay(app: &EditorApp, font: Option<&Font>) {
    draw_overlay_line(
        &format!("Current Tile: {}", app.map.brush.label()),
        10.0,
        26.0,
        font,
    );

    if app.show_help {
        for (i, line) in HELP_LINES.iter().enumerate() {
            draw_overlay_line(line, 10.0, 56.0 + i as f32 * 25.0, font);
        }
    }
}

fn draw_overlay_line(text: &str, x: f32, y: f32, font: Option<&Font>) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size: TEXT_SIZE,
            color: TEXT_COLOR,
            ..Default::default()
        },
    );
}

/// Font-less UI: swatch for the current brush, key glyphs for the help
fn draw_fallback_overlay(app: &EditorApp) {
    let c = app.map.brush.record().color;
    draw_rectangle(10.0, 10.0, 20.0, 20.0, Color::from_rgba(c.r, c.g, c.b, 255));

    if app.show_help {
        draw_direction_icons();
        draw_number_icons();
    }
}

fn draw_triangle_glyph(points: [(f32, f32); 3]) {
    for i in 0..3 {
        let (x0, y0) = points[i];
        let (x1, y1) = points[(i + 1) % 3];
        draw_line(x0, y0, x1, y1, 1.0, TEXT_COLOR);
    }
}

/// Arrow-key glyphs (up, down, left, right)
fn draw_direction_icons() {
    draw_triangle_glyph([(50.0, 10.0), (55.0, 20.0), (45.0, 20.0)]);
    draw_triangle_glyph([(70.0, 20.0), (75.0, 10.0), (65.0, 10.0)]);
    draw_triangle_glyph([(90.0, 15.0), (100.0, 10.0), (100.0, 20.0)]);
    draw_triangle_glyph([(110.0, 10.0), (120.0, 15.0), (110.0, 20.0)]);
}

/// Tally-style glyphs for the 1-4 brush keys
fn draw_number_icons() {
    for i in 0..4 {
        let x = 140.0 + i as f32 * 30.0;
        let y = 10.0;

        draw_line(x, y, x, y + 20.0, 1.0, TEXT_COLOR);

        if i > 0 {
            draw_line(x - 5.0, y + 10.0, x + 5.0, y + 10.0, 1.0, TEXT_COLOR);
        }
        if i > 1 {
            draw_line(x - 5.0, y + 15.0, x + 5.0, y + 15.0, 1.0, TEXT_COLOR);
        }
        if i > 2 {
            draw_line(x - 5.0, y + 5.0, x + 5.0, y + 5.0, 1.0, TEXT_COLOR);
        }
    }
}
