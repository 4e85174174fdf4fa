//! Memoized neighbor-blending results

use std::collections::HashMap;
use tedit_core::{FrameCoordinate, TilePosition};

/// Cache of resolved blend frames, keyed by cell
///
/// A cell's blended frame depends on its neighbors, so any structural edit
/// must clear the edited region plus a one-cell border.
#[derive(Debug, Clone, Default)]
pub struct BlendCache {
    entries: HashMap<TilePosition, FrameCoordinate>,
}

impl BlendCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: TilePosition) -> Option<FrameCoordinate> {
        self.entries.get(&pos).copied()
    }

    pub fn insert(&mut self, pos: TilePosition, frame: FrameCoordinate) {
        self.entries.insert(pos, frame);
    }

    /// Resolve a cell's blend frame, computing and caching it on a miss
    pub fn get_or_insert_with(
        &mut self,
        pos: TilePosition,
        resolve: impl FnOnce() -> FrameCoordinate,
    ) -> FrameCoordinate {
        *self.entries.entry(pos).or_insert_with(resolve)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear the `width` x `height` region at `origin` and its surrounding border.
    /// Returns the number of entries removed.
    pub fn reset_region(&mut self, origin: TilePosition, width: u16, height: u16) -> usize {
        let min_x = origin.x - 1;
        let min_y = origin.y - 1;
        let max_x = origin.x + width as i32;
        let max_y = origin.y + height as i32;

        let before = self.entries.len();
        self.entries
            .retain(|pos, _| pos.x < min_x || pos.x > max_x || pos.y < min_y || pos.y > max_y);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
