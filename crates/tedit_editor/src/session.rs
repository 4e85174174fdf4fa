//! Editor edit session: the collaborators an interactive placement notifies

use crate::{BlendCache, TileSnapshotBuffer};
use std::collections::HashSet;
use tedit_core::{Tile, TilePosition};
use tedit_sprite::EditSession;

/// Tracks everything an interactive edit produces besides the tile writes:
/// undo snapshots, cells waiting for a redraw and the blend cache
#[derive(Debug, Default)]
pub struct EditorSession {
    pub snapshots: TileSnapshotBuffer,
    pub blend_cache: BlendCache,
    dirty: Vec<TilePosition>,
    dirty_set: HashSet<TilePosition>,
    /// Number of blend-cache resets requested since creation
    blend_resets: usize,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells waiting for a redraw, in the order they were invalidated
    pub fn dirty(&self) -> &[TilePosition] {
        &self.dirty
    }

    /// Drain the redraw queue
    pub fn take_dirty(&mut self) -> Vec<TilePosition> {
        self.dirty_set.clear();
        std::mem::take(&mut self.dirty)
    }

    pub fn blend_resets(&self) -> usize {
        self.blend_resets
    }
}

impl EditSession for EditorSession {
    fn save_tile(&mut self, pos: TilePosition, previous: &Tile) {
        self.snapshots.save(pos, *previous);
    }

    fn invalidate(&mut self, pos: TilePosition) {
        if self.dirty_set.insert(pos) {
            self.dirty.push(pos);
        }
    }

    fn reset_blend_cache(&mut self, origin: TilePosition, width: u16, height: u16) {
        let removed = self.blend_cache.reset_region(origin, width, height);
        self.blend_resets += 1;
        tracing::trace!(
            "Reset {} blend cache entries around ({}, {}) {}x{}",
            removed,
            origin.x,
            origin.y,
            width,
            height
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tedit_core::{FrameCoordinate, PropertyCatalog, Size2, SpriteDefinition, TileGrid, World};
    use tedit_sprite::place_sprite;

    fn table_sprite() -> SpriteDefinition {
        SpriteDefinition::Styled {
            tile: 14,
            name: "Tables".to_string(),
            size: Size2::new(3, 2),
            interval: Size2::new(18, 18),
            size_texture: Size2::new(48, 32),
            styles: Default::default(),
        }
    }

    #[test]
    fn test_session_records_every_cell_once() {
        let mut world = World::new("Test".to_string(), 10, 10);
        let mut session = EditorSession::new();
        session
            .blend_cache
            .insert(TilePosition::new(1, 1), FrameCoordinate::new(18, 18));
        session
            .blend_cache
            .insert(TilePosition::new(9, 9), FrameCoordinate::new(18, 18));

        place_sprite(
            TilePosition::new(2, 2),
            &table_sprite(),
            0,
            &mut world,
            &PropertyCatalog::new(),
            &mut session,
        )
        .unwrap();

        assert_eq!(session.snapshots.len(), 6);
        assert_eq!(session.dirty().len(), 6);
        assert_eq!(session.dirty()[1], TilePosition::new(2, 3));
        assert_eq!(session.blend_resets(), 1);
        // (1, 1) is on the border of the placed region, (9, 9) is far away
        assert!(session.blend_cache.get(TilePosition::new(1, 1)).is_none());
        assert!(session.blend_cache.get(TilePosition::new(9, 9)).is_some());
    }

    #[test]
    fn test_replacing_sprite_undoes_to_original() {
        let mut world = World::new("Test".to_string(), 10, 10);
        let mut session = EditorSession::new();
        let catalog = PropertyCatalog::new();

        for _ in 0..2 {
            place_sprite(
                TilePosition::new(0, 0),
                &table_sprite(),
                0,
                &mut world,
                &catalog,
                &mut session,
            )
            .unwrap();
        }

        // Second placement re-saved the same cells; only the originals are kept
        assert_eq!(session.snapshots.len(), 6);
        assert_eq!(session.take_dirty().len(), 6);
        assert!(session.dirty().is_empty());
        assert_eq!(session.blend_resets(), 2);

        session.snapshots.restore(&mut world);
        assert_eq!(world.active_tile_count(), 0);
        assert_eq!(world.tile(TilePosition::new(2, 1)), Some(&Tile::default()));
    }
}
