//! Tile cells, grid positions and texture frame coordinates

use serde::{Deserialize, Serialize};

/// Tile type id of the Christmas tree, the one object placed with an asymmetric anchor frame
pub const CHRISTMAS_TREE_TILE: u16 = 171;

/// A cell in the world grid (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct TilePosition {
    pub x: i32,
    pub y: i32,
}

impl TilePosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by a footprint-local cell offset
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for TilePosition {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Pixel offset (U/V) into a tile's texture atlas
///
/// Frames are stored as 16-bit values in the world format, so arithmetic that
/// produces a frame truncates to `i16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FrameCoordinate {
    pub u: i16,
    pub v: i16,
}

impl FrameCoordinate {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(u: i16, v: i16) -> Self {
        Self { u, v }
    }

    /// Build a frame from wider intermediate values, truncating to the stored width
    #[inline]
    pub fn truncated(u: i32, v: i32) -> Self {
        Self::new(u as i16, v as i16)
    }
}

/// Footprint or texture size in whole units (tiles or pixels depending on use)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size2 {
    pub width: u16,
    pub height: u16,
}

impl Size2 {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of cells covered by this size
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A single world cell
///
/// Only `is_active`, `tile_type`, `u` and `v` are touched by sprite placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tile {
    pub is_active: bool,
    pub tile_type: u16,
    pub u: i16,
    pub v: i16,
    /// Wall id behind the tile (0 = no wall)
    #[serde(default)]
    pub wall: u16,
}

impl Tile {
    /// Create an active tile of the given type at a texture frame
    pub fn active(tile_type: u16, frame: FrameCoordinate) -> Self {
        Self {
            is_active: true,
            tile_type,
            u: frame.u,
            v: frame.v,
            wall: 0,
        }
    }

    /// The tile's current texture frame
    pub fn frame(&self) -> FrameCoordinate {
        FrameCoordinate::new(self.u, self.v)
    }

    /// Activate this tile as `tile_type` showing `frame`, leaving other fields alone
    #[inline]
    pub fn set_sprite_frame(&mut self, tile_type: u16, frame: FrameCoordinate) {
        self.is_active = true;
        self.tile_type = tile_type;
        self.u = frame.u;
        self.v = frame.v;
    }
}
