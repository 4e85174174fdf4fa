//! Multi-tile sprite placement for the TEdit world editor
//!
//! Stamps a [`SpriteDefinition`](tedit_core::SpriteDefinition) onto any
//! [`TileGrid`](tedit_core::TileGrid), computing each footprint cell's texture
//! frame. Editors pass an [`EditSession`] to snapshot tiles for undo, schedule
//! redraws and reset the blend cache; world generation uses
//! [`place_sprite_headless`].
//!
//! Also provides solid-color placeholder previews for sprites whose textures
//! haven't been loaded.

mod frame;
mod place;
mod preview;
mod session;

pub use frame::{build_frame_table, FrameTable, CHRISTMAS_TREE_ANCHOR_U};
pub use place::{place_sprite, place_sprite_headless, Placement, PlacementError};
pub use preview::{
    generate_preview, generate_variant_preview, preview_image, sprite_pixel_size, SpritePreview,
};
pub use session::{EditSession, NoSession};
