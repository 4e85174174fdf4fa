//! Sprite definitions - multi-tile objects that can be stamped onto the world
//!
//! Two shapes exist:
//! - [`SpriteDefinition::Simple`]: one appearance, frames start at `origin` and
//!   are spaced by the tile type's texture grid plus padding
//! - [`SpriteDefinition::Styled`]: several appearances ("styles") sharing a
//!   footprint and frame interval, each with its own origin frame

use crate::{FrameCoordinate, Size2, CHRISTMAS_TREE_TILE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which edge of a sprite attaches to the surrounding terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameAnchor {
    #[default]
    None,
    Left,
    Right,
    Top,
    Bottom,
}

/// One appearance of a multi-style sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteVariant {
    pub tile: u16,
    pub style: i32,
    #[serde(default)]
    pub name: String,
    /// Frame of the style's top-left cell
    pub origin: FrameCoordinate,
    /// Pixel size of the style's preview
    #[serde(default)]
    pub size_texture: Size2,
}

/// An immutable description of a placeable multi-tile object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteDefinition {
    /// Single appearance; frame spacing comes from the tile type's texture grid
    Simple {
        tile: u16,
        #[serde(default)]
        name: String,
        /// Footprint in tiles
        size: Size2,
        origin: FrameCoordinate,
        #[serde(default)]
        anchor: FrameAnchor,
    },
    /// Several appearances keyed by style id
    Styled {
        tile: u16,
        #[serde(default)]
        name: String,
        /// Footprint in tiles
        size: Size2,
        /// Pixel distance between adjacent frames
        interval: Size2,
        /// Pixel size of the whole-sprite preview
        #[serde(default)]
        size_texture: Size2,
        #[serde(default)]
        styles: BTreeMap<i32, SpriteVariant>,
    },
}

impl SpriteDefinition {
    /// Tile type written into every footprint cell
    pub fn tile(&self) -> u16 {
        match self {
            SpriteDefinition::Simple { tile, .. } | SpriteDefinition::Styled { tile, .. } => *tile,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SpriteDefinition::Simple { name, .. } | SpriteDefinition::Styled { name, .. } => name,
        }
    }

    /// Footprint in tiles
    pub fn size(&self) -> Size2 {
        match self {
            SpriteDefinition::Simple { size, .. } | SpriteDefinition::Styled { size, .. } => *size,
        }
    }

    /// Whether this sprite is placed with the hard-coded asymmetric anchor frame
    pub fn is_anchor_object(&self) -> bool {
        self.tile() == CHRISTMAS_TREE_TILE
    }

    /// Origin frame of a style; unknown styles (and simple sprites' style argument) fall back
    /// to the sprite's own origin, which is `(0, 0)` for styled sprites
    pub fn style_origin(&self, style: i32) -> FrameCoordinate {
        match self {
            SpriteDefinition::Simple { origin, .. } => *origin,
            SpriteDefinition::Styled { styles, .. } => styles
                .get(&style)
                .map(|variant| variant.origin)
                .unwrap_or(FrameCoordinate::ZERO),
        }
    }

    /// Look up a style of a multi-style sprite
    pub fn variant(&self, style: i32) -> Option<&SpriteVariant> {
        match self {
            SpriteDefinition::Simple { .. } => None,
            SpriteDefinition::Styled { styles, .. } => styles.get(&style),
        }
    }
}
