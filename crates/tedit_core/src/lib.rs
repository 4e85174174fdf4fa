//! Core data structures for the TEdit world editor
//!
//! This crate provides the fundamental types for representing a tile world and
//! the content that can be placed into it:
//! - `World` / `TileGrid` - A rectangular grid of tiles and the access trait used by editing code
//! - `Tile` - A single cell (active flag, tile type, U/V texture frame)
//! - `TileProperty` / `WallProperty` - Static per-type properties, indexed by `PropertyCatalog`
//! - `SpriteDefinition` - Multi-tile objects, single- or multi-style
//! - `ContentCatalog` - Content metadata loaded from JSON

mod color;
mod content;
mod properties;
mod sprite;
mod tile;
mod world;

pub use color::{Color, ParseColorError};
pub use content::{ContentCatalog, ContentError, ContentFile};
pub use properties::{CatalogError, PropertyCatalog, TileProperty, WallProperty};
pub use sprite::{FrameAnchor, SpriteDefinition, SpriteVariant};
pub use tile::{FrameCoordinate, Size2, Tile, TilePosition, CHRISTMAS_TREE_TILE};
pub use world::{TileGrid, World};
