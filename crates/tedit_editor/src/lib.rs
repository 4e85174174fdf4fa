//! Editor-side pieces of sprite placement
//!
//! The placement engine in `tedit_sprite` only writes tiles. An interactive
//! editor additionally wants:
//! - [`TileSnapshotBuffer`] - prior tile states for reverting the current edit
//! - [`EditorSession`] - the [`EditSession`](tedit_sprite::EditSession) that feeds the
//!   snapshot buffer, queues cells for redraw and resets the [`BlendCache`]
//! - [`SpriteBrush`] - the selected sprite and style, stamped on click

mod blend;
mod brush;
mod session;
mod snapshot;

pub use blend::BlendCache;
pub use brush::SpriteBrush;
pub use session::EditorSession;
pub use snapshot::TileSnapshotBuffer;
