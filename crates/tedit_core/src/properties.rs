//! Tile and wall property catalogs

use crate::{Color, Size2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Errors from catalog lookups
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("tile type {0} is not in the tile property catalog")]
    UnknownTile(u16),
    #[error("wall type {0} is not in the wall property catalog")]
    UnknownWall(u16),
}

fn default_texture_grid() -> Size2 {
    Size2::new(16, 16)
}

/// Static properties of a tile type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileProperty {
    pub id: u16,
    pub name: String,
    /// Representative color used for minimap pixels and placeholder previews
    #[serde(default)]
    pub color: Color,
    /// Pixel size of one texture frame (atlas frames are separated by 2px of padding)
    #[serde(default = "default_texture_grid")]
    pub texture_grid: Size2,
    /// Whether tiles of this type use U/V frames at all
    #[serde(default)]
    pub is_framed: bool,
    /// Footprint of a placed object in tiles, when the type is a multi-tile object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_size: Option<Size2>,
}

impl TileProperty {
    pub fn new(id: u16, name: impl Into<String>, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            texture_grid: default_texture_grid(),
            is_framed: false,
            frame_size: None,
        }
    }

    /// Pixel distance between adjacent frames in the texture atlas
    pub fn frame_interval(&self) -> Size2 {
        Size2::new(self.texture_grid.width + 2, self.texture_grid.height + 2)
    }
}

/// Static properties of a wall type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallProperty {
    pub id: i32,
    pub name: String,
    pub color: Color,
}

impl WallProperty {
    pub fn new(id: i32, name: impl Into<String>, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            color,
        }
    }
}

impl Default for WallProperty {
    fn default() -> Self {
        Self {
            id: -1,
            name: "UNKNOWN".to_string(),
            color: Color::MAGENTA,
        }
    }
}

impl fmt::Display for WallProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Tile and wall properties indexed by type id
#[derive(Debug, Clone, Default)]
pub struct PropertyCatalog {
    tiles: HashMap<u16, TileProperty>,
    walls: HashMap<u16, WallProperty>,
}

impl PropertyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a tile property
    pub fn insert_tile(&mut self, property: TileProperty) {
        self.tiles.insert(property.id, property);
    }

    /// Add or replace a wall property. Walls with a negative id are placeholders and are skipped.
    pub fn insert_wall(&mut self, property: WallProperty) {
        if let Ok(id) = u16::try_from(property.id) {
            self.walls.insert(id, property);
        }
    }

    /// Look up a tile type
    pub fn tile(&self, id: u16) -> Result<&TileProperty, CatalogError> {
        self.tiles.get(&id).ok_or(CatalogError::UnknownTile(id))
    }

    /// Look up a wall type
    pub fn wall(&self, id: u16) -> Result<&WallProperty, CatalogError> {
        self.walls.get(&id).ok_or(CatalogError::UnknownWall(id))
    }

    pub fn contains_tile(&self, id: u16) -> bool {
        self.tiles.contains_key(&id)
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }
}
