//! Edit-session hooks invoked around sprite placement

use tedit_core::{Tile, TilePosition};

/// Editor collaborators notified while a sprite is written into a grid
///
/// Every method defaults to a no-op, so headless callers only implement what
/// they need. Placement calls, in order:
/// 1. [`save_tile`](EditSession::save_tile) for a cell, before it is changed
/// 2. [`invalidate`](EditSession::invalidate) for that cell, after it is changed
/// 3. [`reset_blend_cache`](EditSession::reset_blend_cache) once, after the last cell
pub trait EditSession {
    /// Snapshot a cell's prior state. May be called for cells whose value ends up unchanged.
    fn save_tile(&mut self, _pos: TilePosition, _previous: &Tile) {}

    /// Request a redraw of a cell
    fn invalidate(&mut self, _pos: TilePosition) {}

    /// Drop cached neighbor-blending results for a placed region and its border
    fn reset_blend_cache(&mut self, _origin: TilePosition, _width: u16, _height: u16) {}
}

/// Session used for headless/batch world generation: records nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSession;

impl EditSession for NoSession {}
