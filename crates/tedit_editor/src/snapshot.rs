//! Prior-state snapshots of tiles touched by an edit

use std::collections::HashSet;
use tedit_core::{Tile, TileGrid, TilePosition};

/// Records the state of each tile before the current edit first touched it
///
/// Saving the same position twice keeps the first snapshot, so repeated
/// strokes over a cell still restore what was there before the edit began.
#[derive(Debug, Clone, Default)]
pub struct TileSnapshotBuffer {
    snapshots: Vec<(TilePosition, Tile)>,
    seen: HashSet<TilePosition>,
}

impl TileSnapshotBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `tile` as the prior state of `pos` unless already recorded
    pub fn save(&mut self, pos: TilePosition, tile: Tile) {
        if self.seen.insert(pos) {
            self.snapshots.push((pos, tile));
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot for a position, if it was touched
    pub fn get(&self, pos: TilePosition) -> Option<&Tile> {
        if !self.seen.contains(&pos) {
            return None;
        }
        self.snapshots.iter().find(|(p, _)| *p == pos).map(|(_, t)| t)
    }

    /// Snapshots in the order cells were first touched
    pub fn iter(&self) -> impl Iterator<Item = &(TilePosition, Tile)> {
        self.snapshots.iter()
    }

    /// Write every snapshot back into `grid`, newest first, and clear the buffer.
    /// Returns the positions that were restored.
    pub fn restore<G: TileGrid + ?Sized>(&mut self, grid: &mut G) -> Vec<TilePosition> {
        let mut restored = Vec::with_capacity(self.snapshots.len());
        for (pos, tile) in self.snapshots.drain(..).rev() {
            if let Some(cell) = grid.tile_mut(pos) {
                *cell = tile;
                restored.push(pos);
            }
        }
        self.seen.clear();
        restored
    }

    /// Take the recorded snapshots, leaving the buffer empty
    pub fn take(&mut self) -> Vec<(TilePosition, Tile)> {
        self.seen.clear();
        std::mem::take(&mut self.snapshots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tedit_core::{FrameCoordinate, World};

    #[test]
    fn test_first_snapshot_wins() {
        let mut buffer = TileSnapshotBuffer::new();
        let pos = TilePosition::new(1, 1);
        let original = Tile::active(1, FrameCoordinate::ZERO);

        buffer.save(pos, original);
        buffer.save(pos, Tile::active(5, FrameCoordinate::new(18, 0)));

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.get(pos), Some(&original));
    }

    #[test]
    fn test_restore() {
        let mut world = World::new("Test".to_string(), 4, 4);
        let pos = TilePosition::new(2, 3);
        let mut buffer = TileSnapshotBuffer::new();

        buffer.save(pos, *world.tile(pos).unwrap());
        world.set_tile(pos, Tile::active(5, FrameCoordinate::new(18, 18)));

        let restored = buffer.restore(&mut world);
        assert_eq!(restored, vec![pos]);
        assert_eq!(world.tile(pos), Some(&Tile::default()));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_take_clears() {
        let mut buffer = TileSnapshotBuffer::new();
        buffer.save(TilePosition::new(0, 0), Tile::default());

        let taken = buffer.take();
        assert_eq!(taken.len(), 1);
        assert!(buffer.is_empty());

        // Position can be recorded again after a take
        buffer.save(TilePosition::new(0, 0), Tile::default());
        assert_eq!(buffer.len(), 1);
    }
}
