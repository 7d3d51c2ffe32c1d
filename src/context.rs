use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::{FocusMode, RuntimeConfig};
use crate::element::FocusId;
use crate::host::DialogHost;
use crate::pointer::{FocusSource, PointerFocusClassifier};
use crate::registry::{FocusRegistry, FocusableInfo};
use crate::scope::FocusScopeTree;

/// Bundles the focus collaborators a running UI needs: the scope tree, the
/// pointer classifier, the per-frame registry and the dialog host.
///
/// Constructed once by the application and passed by reference into the
/// focus manager and dispatcher; there is no global instance. The event
/// loop feeds key and mouse events through [`handle_key`](Self::handle_key)
/// and [`handle_mouse`](Self::handle_mouse), which acquire focus according
/// to the configured [`FocusMode`] and classify each acquisition as
/// keyboard- or pointer-driven.
pub struct FocusContext {
    config: RuntimeConfig,
    tree: FocusScopeTree,
    classifier: PointerFocusClassifier,
    registry: FocusRegistry,
    host: DialogHost,
}

impl Default for FocusContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusContext {
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            config,
            tree: FocusScopeTree::new(),
            classifier: PointerFocusClassifier::new(),
            registry: FocusRegistry::new(),
            host: DialogHost::new(),
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn tree(&self) -> &FocusScopeTree {
        &self.tree
    }

    pub fn classifier(&self) -> &PointerFocusClassifier {
        &self.classifier
    }

    pub fn classifier_mut(&mut self) -> &mut PointerFocusClassifier {
        &mut self.classifier
    }

    pub fn registry(&self) -> &FocusRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut FocusRegistry {
        &mut self.registry
    }

    pub fn host(&self) -> &DialogHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut DialogHost {
        &mut self.host
    }

    /// Begin a new frame: focusable geometry from the previous frame is
    /// discarded.
    pub fn begin_frame(&mut self) {
        self.registry.clear();
    }

    /// Register a focusable for the current frame, declaring its scope.
    pub fn register_focusable(&mut self, info: FocusableInfo) {
        self.tree.register(info.id, info.host);
        self.registry.register(info);
    }

    /// The deepest actually-focused element, descending nested focus
    /// scopes.
    pub fn focused_element(&self) -> Option<FocusId> {
        self.tree.focused()
    }

    /// Focus an element, classifying how focus was acquired.
    pub fn focus(&mut self, element: FocusId, source: FocusSource) {
        self.tree.focus(element);
        self.classifier.record(element, source);
    }

    /// Clear top-level focus.
    pub fn blur(&mut self) {
        self.tree.blur();
    }

    /// Refocus an element after a dialog stack unwinds, reinstating
    /// pointer-focus styling if the element had it when captured.
    pub fn restore_focus(&mut self, element: FocusId, pointer_driven: bool) {
        self.tree.focus(element);
        if pointer_driven {
            self.classifier.apply_pointer_styling(element);
        }
    }

    /// Handle a keyboard event: Tab and Shift-Tab cycle focus within the
    /// active layer.
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }

        match key_event.code {
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            _ => {}
        }
    }

    /// Focus the next element in the active layer (Tab)
    pub fn focus_next(&mut self) {
        let ids = self.registry.ids_in_active_layer();
        if ids.is_empty() {
            return;
        }

        let next = if let Some(current) = self.focused_element() {
            if let Some(pos) = ids.iter().position(|id| *id == current) {
                ids[(pos + 1) % ids.len()]
            } else {
                ids[0]
            }
        } else {
            ids[0]
        };

        self.focus(next, FocusSource::Keyboard);
    }

    /// Focus the previous element in the active layer (Shift-Tab)
    pub fn focus_previous(&mut self) {
        let ids = self.registry.ids_in_active_layer();
        if ids.is_empty() {
            return;
        }

        let previous = if let Some(current) = self.focused_element() {
            if let Some(pos) = ids.iter().position(|id| *id == current) {
                let prev_pos = if pos == 0 { ids.len() - 1 } else { pos - 1 };
                ids[prev_pos]
            } else {
                ids[0]
            }
        } else {
            ids[ids.len() - 1]
        };

        self.focus(previous, FocusSource::Keyboard);
    }

    /// Handle a mouse event according to the configured focus mode.
    pub fn handle_mouse(&mut self, mouse_event: MouseEvent) {
        let (x, y) = (mouse_event.column, mouse_event.row);

        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(clicked) = self.registry.find_at_position(x, y) {
                    if self.focused_element() != Some(clicked) {
                        self.focus(clicked, FocusSource::Pointer);
                    }
                } else if self.focused_element().is_some() {
                    // Clicked on non-focusable area - clear focus
                    self.blur();
                }
            }
            MouseEventKind::Moved => match self.config.focus_mode {
                FocusMode::Click => {
                    // Do nothing - focus only changes on click
                }
                FocusMode::Hover => {
                    if let Some(hovered) = self.registry.find_at_position(x, y) {
                        if self.focused_element() != Some(hovered) {
                            self.focus(hovered, FocusSource::Pointer);
                        }
                    }
                }
                FocusMode::HoverWhenUnfocused => {
                    if self.focused_element().is_none() {
                        if let Some(hovered) = self.registry.find_at_position(x, y) {
                            self.focus(hovered, FocusSource::Pointer);
                        }
                    }
                }
            },
            _ => {}
        }
    }
}
