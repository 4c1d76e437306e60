//! Pooled text drawables
//!
//! Text nodes are lazily constructed once per pool slot and never torn down
//! while the program runs; reuse toggles the enabled flags and reloads the
//! content.

use crate::foundation::math::Vec3;
use crate::foundation::threading::ThreadOwnershipMask;

/// How a text drawable is projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDrawMode {
    /// Placed in the world with no billboarding.
    #[default]
    InWorld,
    /// Screen-space overlay; position is in clip space.
    Overlay2D,
    /// Anchored at a world position but always facing the camera.
    Overlay2DFacingCamera,
}

/// A poolable drawable that renders a string.
#[derive(Debug)]
pub struct TextNode {
    enabled: bool,
    mesh_asset_enabled: bool,
    content: String,
    draw_mode: TextDrawMode,
    position: Vec3,
    scale: f32,
    reload_count: u32,
}

impl TextNode {
    /// Create a disabled, empty text node.
    pub fn new() -> Self {
        Self {
            enabled: false,
            mesh_asset_enabled: false,
            content: String::new(),
            draw_mode: TextDrawMode::default(),
            position: Vec3::zeros(),
            scale: 1.0,
            reload_count: 0,
        }
    }

    /// Enable or disable the node together with its mesh asset.
    pub fn set_self_and_mesh_asset_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.mesh_asset_enabled = enabled;
    }

    /// Whether the node is currently drawn.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Rebuild the drawable's content from a string.
    ///
    /// The mask tags the worker that owns the downstream glyph-geometry
    /// build; it is carried through untouched.
    pub fn load_from_string(
        &mut self,
        text: &str,
        draw_mode: TextDrawMode,
        _mask: ThreadOwnershipMask,
    ) {
        self.content.clear();
        self.content.push_str(text);
        self.draw_mode = draw_mode;
        self.reload_count += 1;
        log::trace!("text node reloaded: {:?} ({:?})", text, draw_mode);
    }

    /// Current string content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Current projection mode.
    pub fn draw_mode(&self) -> TextDrawMode {
        self.draw_mode
    }

    /// Set the node position (clip space for overlays, world otherwise).
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Current position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the glyph scale.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Current glyph scale.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// How many times the content has been (re)loaded.
    pub fn reload_count(&self) -> u32 {
        self.reload_count
    }
}

impl Default for TextNode {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_disabled_with_unit_scale() {
        let node = TextNode::new();
        assert!(!node.is_enabled());
        assert_eq!(node.scale(), 1.0);
        assert_eq!(node.content(), "");
    }

    #[test]
    fn test_load_from_string_counts_reloads() {
        let mut node = TextNode::new();
        node.load_from_string("HP:100", TextDrawMode::Overlay2D, ThreadOwnershipMask::GAME);
        node.load_from_string("HP:95", TextDrawMode::Overlay2D, ThreadOwnershipMask::GAME);
        assert_eq!(node.content(), "HP:95");
        assert_eq!(node.reload_count(), 2);
        assert_eq!(node.draw_mode(), TextDrawMode::Overlay2D);
    }

    #[test]
    fn test_enable_toggles_both_flags() {
        let mut node = TextNode::new();
        node.set_self_and_mesh_asset_enabled(true);
        assert!(node.is_enabled());
        node.set_self_and_mesh_asset_enabled(false);
        assert!(!node.is_enabled());
    }
}
