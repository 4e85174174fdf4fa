//! Placeholder previews for sprites whose texture isn't loaded yet

use image::{Rgba, RgbaImage};
use tedit_core::{CatalogError, Color, PropertyCatalog, Size2, SpriteDefinition, SpriteVariant};

/// A preview bitmap and whether it came from a real texture
#[derive(Debug, Clone)]
pub struct SpritePreview {
    pub image: RgbaImage,
    /// `false` for solid-color placeholders
    pub is_preview_texture: bool,
}

impl SpritePreview {
    /// Solid-color placeholder
    pub fn placeholder(size: Size2, color: Color) -> Self {
        Self {
            image: preview_image(size, color),
            is_preview_texture: false,
        }
    }
}

/// Build a `size`-pixel image filled with `color`
pub fn preview_image(size: Size2, color: Color) -> RgbaImage {
    RgbaImage::from_pixel(size.width as u32, size.height as u32, Rgba(color.to_array()))
}

/// Pixel size of a sprite's preview
///
/// Styled sprites carry an explicit texture size; simple sprites cover their footprint
/// in texture-grid cells of their tile type.
pub fn sprite_pixel_size(
    sprite: &SpriteDefinition,
    catalog: &PropertyCatalog,
) -> Result<Size2, CatalogError> {
    match sprite {
        SpriteDefinition::Simple { tile, size, .. } => {
            let grid = catalog.tile(*tile)?.texture_grid;
            Ok(Size2::new(
                size.width.saturating_mul(grid.width),
                size.height.saturating_mul(grid.height),
            ))
        }
        SpriteDefinition::Styled { size_texture, .. } => Ok(*size_texture),
    }
}

/// Placeholder preview for a whole sprite, colored like its tile type
pub fn generate_preview(
    sprite: &SpriteDefinition,
    catalog: &PropertyCatalog,
) -> Result<SpritePreview, CatalogError> {
    let color = catalog.tile(sprite.tile())?.color;
    let size = sprite_pixel_size(sprite, catalog)?;
    Ok(SpritePreview::placeholder(size, color))
}

/// Placeholder preview for one style of a sprite
pub fn generate_variant_preview(
    variant: &SpriteVariant,
    catalog: &PropertyCatalog,
) -> Result<SpritePreview, CatalogError> {
    let color = catalog.tile(variant.tile)?.color;
    Ok(SpritePreview::placeholder(variant.size_texture, color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tedit_core::{FrameAnchor, FrameCoordinate, TileProperty};

    fn catalog() -> PropertyCatalog {
        let mut catalog = PropertyCatalog::new();
        let mut sign = TileProperty::new(55, "Sign", Color::rgb(119, 105, 79));
        sign.texture_grid = Size2::new(16, 16);
        catalog.insert_tile(sign);
        catalog
    }

    #[test]
    fn test_preview_is_uniform() {
        let image = preview_image(Size2::new(3, 2), Color::rgba(10, 20, 30, 40));
        assert_eq!(image.dimensions(), (3, 2));
        assert!(image.pixels().all(|p| *p == Rgba([10, 20, 30, 40])));
    }

    #[test]
    fn test_simple_sprite_preview() {
        let sign = SpriteDefinition::Simple {
            tile: 55,
            name: "Sign".to_string(),
            size: Size2::new(2, 2),
            origin: FrameCoordinate::ZERO,
            anchor: FrameAnchor::None,
        };
        let preview = generate_preview(&sign, &catalog()).unwrap();

        assert!(!preview.is_preview_texture);
        assert_eq!(preview.image.dimensions(), (32, 32));
        assert_eq!(preview.image.get_pixel(31, 31), &Rgba([119, 105, 79, 255]));
    }

    #[test]
    fn test_variant_preview_uses_texture_size() {
        let variant = SpriteVariant {
            tile: 55,
            style: 1,
            name: "Tombstone".to_string(),
            origin: FrameCoordinate::new(36, 0),
            size_texture: Size2::new(32, 32),
        };
        let styled = SpriteDefinition::Styled {
            tile: 55,
            name: "Signs".to_string(),
            size: Size2::new(2, 2),
            interval: Size2::new(18, 18),
            size_texture: Size2::new(64, 32),
            styles: BTreeMap::from([(1, variant.clone())]),
        };

        let whole = generate_preview(&styled, &catalog()).unwrap();
        assert_eq!(whole.image.dimensions(), (64, 32));

        let one = generate_variant_preview(&variant, &catalog()).unwrap();
        assert_eq!(one.image.dimensions(), (32, 32));
    }

    #[test]
    fn test_preview_unknown_tile() {
        let variant = SpriteVariant {
            tile: 9000,
            style: 0,
            name: String::new(),
            origin: FrameCoordinate::ZERO,
            size_texture: Size2::new(16, 16),
        };
        assert!(matches!(
            generate_variant_preview(&variant, &catalog()),
            Err(CatalogError::UnknownTile(9000))
        ));
    }
}
