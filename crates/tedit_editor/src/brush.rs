//! Sprite brush tool

use tedit_core::{ContentCatalog, PropertyCatalog, SpriteDefinition, TileGrid, TilePosition};
use tedit_sprite::{
    generate_preview, place_sprite, EditSession, Placement, PlacementError, SpritePreview,
};

/// The sprite currently selected for stamping, with its chosen style
#[derive(Debug, Clone)]
pub struct SpriteBrush {
    pub sprite: SpriteDefinition,
    pub style: i32,
}

impl SpriteBrush {
    pub fn new(sprite: SpriteDefinition, style: i32) -> Self {
        Self { sprite, style }
    }

    /// Select a sprite from loaded content by name
    pub fn from_content(content: &ContentCatalog, name: &str, style: i32) -> Option<Self> {
        content
            .sprite_by_name(name)
            .map(|sprite| Self::new(sprite.clone(), style))
    }

    /// Stamp the brush with its top-left cell at `pos`
    pub fn apply<G, S>(
        &self,
        grid: &mut G,
        pos: TilePosition,
        catalog: &PropertyCatalog,
        session: &mut S,
    ) -> Result<Placement, PlacementError>
    where
        G: TileGrid + ?Sized,
        S: EditSession + ?Sized,
    {
        match place_sprite(pos, &self.sprite, self.style, grid, catalog, session) {
            Ok(placement) => {
                tracing::info!(
                    "Placed '{}' at ({}, {})",
                    self.sprite.name(),
                    pos.x,
                    pos.y
                );
                Ok(placement)
            }
            Err(e) => {
                tracing::warn!("Could not place '{}': {}", self.sprite.name(), e);
                Err(e)
            }
        }
    }

    /// Placeholder preview of the selected sprite
    pub fn preview(&self, catalog: &PropertyCatalog) -> Option<SpritePreview> {
        match generate_preview(&self.sprite, catalog) {
            Ok(preview) => Some(preview),
            Err(e) => {
                tracing::warn!("No preview for '{}': {}", self.sprite.name(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EditorSession;
    use tedit_core::{FrameCoordinate, World};

    const CONTENT: &str = r##"{
        "tiles": [
            { "id": 21, "name": "Chest", "color": "#AE815C", "is_framed": true }
        ],
        "sprites": [
            { "simple": {
                "tile": 21, "name": "Chest",
                "size": { "width": 2, "height": 2 },
                "origin": { "u": 0, "v": 0 },
                "anchor": "bottom"
            } }
        ]
    }"##;

    #[test]
    fn test_brush_from_content() {
        let content = ContentCatalog::from_json_str(CONTENT).unwrap();
        let brush = SpriteBrush::from_content(&content, "Chest", 0).unwrap();
        let mut world = World::new("Test".to_string(), 8, 8);
        let mut session = EditorSession::new();

        let placement = brush
            .apply(&mut world, TilePosition::new(4, 6), &content.properties, &mut session)
            .unwrap();

        assert_eq!(placement.cells(), 4);
        assert_eq!(
            world.tile(TilePosition::new(5, 7)).map(|t| t.frame()),
            Some(FrameCoordinate::new(18, 18))
        );
        assert_eq!(session.dirty().len(), 4);

        let preview = brush.preview(&content.properties).unwrap();
        assert_eq!(preview.image.dimensions(), (32, 32));

        assert!(SpriteBrush::from_content(&content, "Piano", 0).is_none());
    }

    #[test]
    fn test_brush_rejects_edge_placement() {
        let content = ContentCatalog::from_json_str(CONTENT).unwrap();
        let brush = SpriteBrush::from_content(&content, "Chest", 0).unwrap();
        let mut world = World::new("Test".to_string(), 8, 8);
        let mut session = EditorSession::new();

        let result = brush.apply(
            &mut world,
            TilePosition::new(7, 7),
            &content.properties,
            &mut session,
        );

        assert!(matches!(result, Err(PlacementError::OutOfBounds { .. })));
        assert!(session.snapshots.is_empty());
        assert_eq!(session.blend_resets(), 0);
    }
}
