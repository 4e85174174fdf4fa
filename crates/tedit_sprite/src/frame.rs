//! Footprint-to-frame tables

use tedit_core::{CatalogError, FrameCoordinate, PropertyCatalog, Size2, SpriteDefinition};

/// U of the origin cell of the Christmas tree. The remaining cells store their own
/// footprint offset as U/V instead of an atlas frame.
pub const CHRISTMAS_TREE_ANCHOR_U: i16 = 10;

/// Texture frame for every cell of a sprite footprint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    size: Size2,
    /// Column-major: index = x * height + y
    frames: Vec<FrameCoordinate>,
}

impl FrameTable {
    fn from_fn(size: Size2, mut frame_at: impl FnMut(u16, u16) -> FrameCoordinate) -> Self {
        let mut frames = Vec::with_capacity(size.area());
        for x in 0..size.width {
            for y in 0..size.height {
                frames.push(frame_at(x, y));
            }
        }
        Self { size, frames }
    }

    pub fn size(&self) -> Size2 {
        self.size
    }

    /// Frame for footprint-local cell `(x, y)`
    pub fn get(&self, x: u16, y: u16) -> Option<FrameCoordinate> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.frames
            .get(x as usize * self.size.height as usize + y as usize)
            .copied()
    }

    /// Iterate `(x, y, frame)` with x in the outer loop and y in the inner loop
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, FrameCoordinate)> + '_ {
        let height = self.size.height.max(1) as usize;
        self.frames
            .iter()
            .enumerate()
            .map(move |(i, frame)| ((i / height) as u16, (i % height) as u16, *frame))
    }
}

/// Build the frame table for placing `sprite` with `style`
///
/// Simple sprites read their frame interval from the tile type's texture grid, so the
/// tile type must be in `catalog`. Styled sprites never touch the catalog.
pub fn build_frame_table(
    sprite: &SpriteDefinition,
    style: i32,
    catalog: &PropertyCatalog,
) -> Result<FrameTable, CatalogError> {
    let size = sprite.size();

    if sprite.is_anchor_object() {
        return Ok(FrameTable::from_fn(size, |x, y| {
            if x == 0 && y == 0 {
                FrameCoordinate::new(CHRISTMAS_TREE_ANCHOR_U, 0)
            } else {
                FrameCoordinate::new(x as i16, y as i16)
            }
        }));
    }

    let interval = match sprite {
        SpriteDefinition::Simple { tile, .. } => catalog.tile(*tile)?.frame_interval(),
        SpriteDefinition::Styled { interval, .. } => *interval,
    };
    let origin = sprite.style_origin(style);

    Ok(FrameTable::from_fn(size, |x, y| {
        FrameCoordinate::truncated(
            interval.width as i32 * x as i32 + origin.u as i32,
            interval.height as i32 * y as i32 + origin.v as i32,
        )
    }))
}
