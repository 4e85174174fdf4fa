//! World tile grid

use crate::{Tile, TilePosition};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mutable access to tiles by world position
///
/// This is the only capability sprite placement needs from a world. Positions
/// outside the grid yield `None`.
pub trait TileGrid {
    /// Grid width in tiles
    fn width(&self) -> u32;

    /// Grid height in tiles
    fn height(&self) -> u32;

    /// Read a tile
    fn tile(&self, pos: TilePosition) -> Option<&Tile>;

    /// Get a tile for in-place mutation
    fn tile_mut(&mut self, pos: TilePosition) -> Option<&mut Tile>;

    /// Check whether a position lies inside the grid
    fn contains(&self, pos: TilePosition) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width() && (pos.y as u32) < self.height()
    }

    /// Check whether a whole `width` x `height` rectangle anchored at `origin` lies inside the grid
    fn contains_region(&self, origin: TilePosition, width: u16, height: u16) -> bool {
        if width == 0 || height == 0 {
            return true;
        }
        self.contains(origin)
            && self.contains(origin.offset(width as i32 - 1, height as i32 - 1))
    }
}

/// A world containing a rectangular grid of tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub id: Uuid,
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Row-major tile storage
    pub tiles: Vec<Tile>,
}

impl World {
    /// Create a new world filled with empty tiles
    pub fn new(name: String, width: u32, height: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            width,
            height,
            tiles: vec![Tile::default(); (width * height) as usize],
        }
    }

    fn index(&self, pos: TilePosition) -> Option<usize> {
        if self.contains(pos) {
            Some((pos.y as u32 * self.width + pos.x as u32) as usize)
        } else {
            None
        }
    }

    /// Replace the tile at a position, returning the previous value
    pub fn set_tile(&mut self, pos: TilePosition, tile: Tile) -> Option<Tile> {
        let index = self.index(pos)?;
        Some(std::mem::replace(&mut self.tiles[index], tile))
    }

    /// Count active tiles (used by headless generation reports)
    pub fn active_tile_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_active).count()
    }
}

impl TileGrid for World {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn tile(&self, pos: TilePosition) -> Option<&Tile> {
        let index = self.index(pos)?;
        self.tiles.get(index)
    }

    fn tile_mut(&mut self, pos: TilePosition) -> Option<&mut Tile> {
        let index = self.index(pos)?;
        self.tiles.get_mut(index)
    }
}
