use ratatui::layout::Rect;

use crate::element::{DialogId, FocusId};

/// Information about a focusable element registered for the current frame
pub struct FocusableInfo {
    pub id: FocusId,
    pub rect: Rect,
    /// Scope host element this focusable lives under, if any
    pub host: Option<FocusId>,
}

/// Focus context for a single layer in the UI
struct LayerContext {
    /// Dialog that owns this layer; the base layer has none
    dialog: Option<DialogId>,
    focusables: Vec<FocusableInfo>,
}

/// Stores focusable geometry for the current frame, organized by layer.
///
/// Rebuilt every frame: the base layer holds the regular UI, and each open
/// modal dialog pushes a layer on top while it renders. Only the topmost
/// layer participates in focus acquisition, which is what makes a dialog
/// modal with respect to mouse and Tab focus.
pub struct FocusRegistry {
    layers: Vec<LayerContext>,
}

impl Default for FocusRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusRegistry {
    pub fn new() -> Self {
        Self {
            layers: vec![LayerContext {
                dialog: None,
                focusables: Vec::new(),
            }],
        }
    }

    /// Reset to a single empty base layer (start of frame).
    pub fn clear(&mut self) {
        self.layers.clear();
        self.layers.push(LayerContext {
            dialog: None,
            focusables: Vec::new(),
        });
    }

    /// Open a layer for a dialog; subsequent registrations land in it.
    pub fn push_layer(&mut self, dialog: DialogId) {
        self.layers.push(LayerContext {
            dialog: Some(dialog),
            focusables: Vec::new(),
        });
    }

    /// Close the topmost dialog layer. The base layer is never popped.
    pub fn pop_layer(&mut self) {
        if self.layers.len() > 1 {
            self.layers.pop();
        }
    }

    /// Dialog owning the active layer, if the active layer belongs to one.
    pub fn active_dialog(&self) -> Option<DialogId> {
        self.layers.last().and_then(|layer| layer.dialog)
    }

    pub fn register(&mut self, info: FocusableInfo) {
        let layer = self
            .layers
            .last_mut()
            .expect("FocusRegistry should always have at least one layer");

        if layer.focusables.iter().any(|f| f.id == info.id) {
            #[cfg(debug_assertions)]
            panic!(
                "Duplicate FocusId detected: {:?}. Each focusable element must have a unique ID within its layer.",
                info.id
            );

            #[cfg(not(debug_assertions))]
            log::warn!("duplicate FocusId {:?} - last registration wins", info.id);
        }

        layer.focusables.push(info);
    }

    fn active_layer(&self) -> Option<&LayerContext> {
        self.layers.last()
    }

    pub fn find_in_active_layer(&self, id: &FocusId) -> Option<&FocusableInfo> {
        self.active_layer()?.focusables.iter().find(|f| &f.id == id)
    }

    /// Focusable ids in the active layer, in registration (Tab) order.
    pub fn ids_in_active_layer(&self) -> Vec<FocusId> {
        self.active_layer()
            .map(|layer| layer.focusables.iter().map(|f| f.id).collect())
            .unwrap_or_default()
    }

    /// Topmost focusable in the active layer containing the position.
    pub fn find_at_position(&self, x: u16, y: u16) -> Option<FocusId> {
        self.active_layer()?
            .focusables
            .iter()
            .rev()
            .find(|f| point_in_rect(x, y, f.rect))
            .map(|f| f.id)
    }

    /// Whether the id is registered in any layer.
    pub fn contains(&self, id: &FocusId) -> bool {
        self.layers
            .iter()
            .any(|layer| layer.focusables.iter().any(|f| &f.id == id))
    }
}

fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK: FocusId = FocusId::new("ok");
    const CANCEL: FocusId = FocusId::new("cancel");
    const BACKGROUND: FocusId = FocusId::new("background");
    const CONFIRM: DialogId = DialogId::new("confirm");

    fn info(id: FocusId, x: u16, width: u16) -> FocusableInfo {
        FocusableInfo {
            id,
            rect: Rect::new(x, 0, width, 1),
            host: None,
        }
    }

    #[test]
    fn test_hit_test_in_active_layer() {
        let mut registry = FocusRegistry::new();
        registry.register(info(OK, 0, 4));
        registry.register(info(CANCEL, 5, 6));

        assert_eq!(registry.find_at_position(2, 0), Some(OK));
        assert_eq!(registry.find_at_position(6, 0), Some(CANCEL));
        assert_eq!(registry.find_at_position(20, 0), None);
    }

    #[test]
    fn test_dialog_layer_masks_base_layer() {
        let mut registry = FocusRegistry::new();
        registry.register(info(BACKGROUND, 0, 40));

        registry.push_layer(CONFIRM);
        registry.register(info(OK, 10, 4));

        // Base-layer elements are not reachable while the dialog layer is active.
        assert_eq!(registry.find_at_position(0, 0), None);
        assert_eq!(registry.find_at_position(11, 0), Some(OK));
        assert_eq!(registry.ids_in_active_layer(), vec![OK]);
        assert_eq!(registry.active_dialog(), Some(CONFIRM));

        registry.pop_layer();
        assert_eq!(registry.find_at_position(0, 0), Some(BACKGROUND));
        assert_eq!(registry.active_dialog(), None);
    }

    #[test]
    fn test_base_layer_never_popped() {
        let mut registry = FocusRegistry::new();
        registry.register(info(BACKGROUND, 0, 10));
        registry.pop_layer();
        assert!(registry.contains(&BACKGROUND));
    }

    #[test]
    fn test_contains_searches_all_layers() {
        let mut registry = FocusRegistry::new();
        registry.register(info(BACKGROUND, 0, 10));
        registry.push_layer(CONFIRM);
        registry.register(info(OK, 0, 4));

        assert!(registry.contains(&BACKGROUND));
        assert!(registry.contains(&OK));
        assert!(!registry.contains(&CANCEL));
    }

    #[test]
    fn test_find_in_active_layer_returns_geometry() {
        let mut registry = FocusRegistry::new();
        registry.register(info(OK, 3, 4));

        let found = registry.find_in_active_layer(&OK).unwrap();
        assert_eq!(found.rect, Rect::new(3, 0, 4, 1));
        assert!(registry.find_in_active_layer(&CANCEL).is_none());
    }

    #[test]
    fn test_overlapping_rects_topmost_wins() {
        let mut registry = FocusRegistry::new();
        registry.register(info(BACKGROUND, 0, 40));
        registry.register(info(OK, 10, 4));

        assert_eq!(registry.find_at_position(11, 0), Some(OK));
    }
}
