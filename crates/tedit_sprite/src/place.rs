//! Stamping sprites onto a tile grid

use crate::frame::build_frame_table;
use crate::session::{EditSession, NoSession};
use tedit_core::{CatalogError, PropertyCatalog, Size2, SpriteDefinition, TileGrid, TilePosition};

/// Errors that abort a placement. Nothing has been written when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("sprite footprint {width}x{height} at ({}, {}) does not fit in the world", .origin.x, .origin.y)]
    OutOfBounds {
        origin: TilePosition,
        width: u16,
        height: u16,
    },
}

/// Result of a successful placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub tile: u16,
    pub origin: TilePosition,
    pub size: Size2,
}

impl Placement {
    /// Number of cells written
    pub fn cells(&self) -> usize {
        self.size.area()
    }
}

/// Place `sprite` with its top-left cell at `dest`
///
/// Every footprint cell is activated, set to the sprite's tile type and given its
/// texture frame. Cells are visited with x in the outer loop and y in the inner
/// loop; `session` sees `save_tile` before and `invalidate` after each write, then
/// a single `reset_blend_cache` covering the footprint.
///
/// The frame table and bounds are checked before the first write, so on error the
/// grid is untouched. `style` is ignored by single-style sprites; a style id the
/// sprite doesn't define places frames as if its origin were `(0, 0)`.
pub fn place_sprite<G, S>(
    dest: TilePosition,
    sprite: &SpriteDefinition,
    style: i32,
    grid: &mut G,
    catalog: &PropertyCatalog,
    session: &mut S,
) -> Result<Placement, PlacementError>
where
    G: TileGrid + ?Sized,
    S: EditSession + ?Sized,
{
    let size = sprite.size();
    let frames = build_frame_table(sprite, style, catalog)?;

    if !grid.contains_region(dest, size.width, size.height) {
        return Err(PlacementError::OutOfBounds {
            origin: dest,
            width: size.width,
            height: size.height,
        });
    }

    let tile_type = sprite.tile();
    for (x, y, frame) in frames.iter() {
        let pos = dest.offset(x as i32, y as i32);
        // In bounds: the whole footprint was checked above
        let Some(tile) = grid.tile_mut(pos) else {
            continue;
        };
        session.save_tile(pos, tile);
        tile.set_sprite_frame(tile_type, frame);
        session.invalidate(pos);
    }

    session.reset_blend_cache(dest, size.width, size.height);

    tracing::debug!(
        "Placed sprite '{}' (tile {}, style {}) at ({}, {}) covering {}x{}",
        sprite.name(),
        tile_type,
        style,
        dest.x,
        dest.y,
        size.width,
        size.height
    );

    Ok(Placement {
        tile: tile_type,
        origin: dest,
        size,
    })
}

/// Place a sprite without any edit-session side effects (world generation, batch tools)
pub fn place_sprite_headless<G>(
    dest: TilePosition,
    sprite: &SpriteDefinition,
    style: i32,
    grid: &mut G,
    catalog: &PropertyCatalog,
) -> Result<Placement, PlacementError>
where
    G: TileGrid + ?Sized,
{
    place_sprite(dest, sprite, style, grid, catalog, &mut NoSession)
}
