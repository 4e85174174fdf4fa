//! Content metadata loading
//!
//! Tile properties, wall properties and sprite definitions are loaded once at
//! startup from a JSON document:
//!
//! ```json
//! {
//!   "tiles":   [{ "id": 5, "name": "Trees", "color": "#976B4B" }],
//!   "walls":   [{ "id": 1, "name": "Stone Wall", "color": "#343434" }],
//!   "sprites": [{ "simple": { "tile": 5, "size": { "width": 1, "height": 1 }, "origin": { "u": 0, "v": 0 } } }]
//! }
//! ```
//!
//! Loading validates that every sprite refers to a known tile type, so
//! placement can treat a missing catalog entry as a broken invariant.

use crate::{PropertyCatalog, SpriteDefinition, TileProperty, WallProperty};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors raised while loading content metadata
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("sprite '{sprite}' references unknown tile type {tile}")]
    UnknownSpriteTile { sprite: String, tile: u16 },
}

/// On-disk content document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub tiles: Vec<TileProperty>,
    #[serde(default)]
    pub walls: Vec<WallProperty>,
    #[serde(default)]
    pub sprites: Vec<SpriteDefinition>,
}

/// Loaded, validated content: property catalog plus sprite definitions
#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    pub properties: PropertyCatalog,
    pub sprites: Vec<SpriteDefinition>,
}

impl ContentCatalog {
    /// Load content from a JSON file
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded content from {}: {} tiles, {} walls, {} sprites",
            path.display(),
            catalog.properties.tile_count(),
            catalog.properties.wall_count(),
            catalog.sprites.len()
        );
        Ok(catalog)
    }

    /// Parse and validate content from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let file: ContentFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Index a parsed content document and validate sprite references
    pub fn from_file(file: ContentFile) -> Result<Self, ContentError> {
        let mut properties = PropertyCatalog::new();
        for tile in file.tiles {
            properties.insert_tile(tile);
        }
        for wall in file.walls {
            if wall.id < 0 {
                tracing::warn!("Skipping placeholder wall '{}'", wall);
            }
            properties.insert_wall(wall);
        }

        let catalog = Self {
            properties,
            sprites: file.sprites,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that every sprite's tile type has a catalog entry
    pub fn validate(&self) -> Result<(), ContentError> {
        for sprite in &self.sprites {
            if !self.properties.contains_tile(sprite.tile()) {
                tracing::warn!(
                    "Sprite '{}' references unknown tile type {}",
                    sprite.name(),
                    sprite.tile()
                );
                return Err(ContentError::UnknownSpriteTile {
                    sprite: sprite.name().to_string(),
                    tile: sprite.tile(),
                });
            }
        }
        Ok(())
    }

    /// Find a sprite by name
    pub fn sprite_by_name(&self, name: &str) -> Option<&SpriteDefinition> {
        self.sprites.iter().find(|s| s.name() == name)
    }

    /// All sprites placing a given tile type
    pub fn sprites_for_tile(&self, tile: u16) -> impl Iterator<Item = &SpriteDefinition> {
        self.sprites.iter().filter(move |s| s.tile() == tile)
    }
}
