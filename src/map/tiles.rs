//! Tile kinds and their fixed color table

use crate::raster::Color;

/// The closed set of paintable tile kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Grass,
    Water,
    Mountain,
    Forest,
}

impl TileKind {
    pub const ALL: [TileKind; 4] = [
        TileKind::Grass,
        TileKind::Water,
        TileKind::Mountain,
        TileKind::Forest,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TileKind::Grass => "grass",
            TileKind::Water => "water",
            TileKind::Mountain => "mountain",
            TileKind::Forest => "forest",
        }
    }

    /// Kind to record lookup. The match is total over the closed enum, so
    /// there is no "unknown tile type" at runtime.
    pub fn record(self) -> TileRecord {
        let color = match self {
            TileKind::Grass => Color::new(0, 200, 0),
            TileKind::Water => Color::new(0, 0, 200),
            TileKind::Mountain => Color::new(150, 150, 150),
            TileKind::Forest => Color::new(0, 100, 0),
        };
        TileRecord { kind: self, color }
    }
}

/// A painted tile: its kind plus the base render color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRecord {
    pub kind: TileKind,
    pub color: Color,
}
