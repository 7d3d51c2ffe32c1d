use std::collections::HashSet;

use crate::element::FocusId;

/// How an element acquired focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSource {
    Keyboard,
    Pointer,
}

/// Records which elements were focused via pointer interaction.
///
/// Renderers consult this to suppress the keyboard focus ring on elements
/// the user clicked or hovered into. Dialog restoration reads the flag when
/// capturing a restoration target and re-applies it after restoring focus,
/// so the element comes back with the same focus styling it had.
#[derive(Debug, Default)]
pub struct PointerFocusClassifier {
    pointer_focused: HashSet<FocusId>,
}

impl PointerFocusClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how `element` acquired focus. Keyboard acquisition clears any
    /// earlier pointer mark.
    pub fn record(&mut self, element: FocusId, source: FocusSource) {
        match source {
            FocusSource::Pointer => {
                self.pointer_focused.insert(element);
            }
            FocusSource::Keyboard => {
                self.pointer_focused.remove(&element);
            }
        }
    }

    pub fn is_pointer_focused(&self, element: &FocusId) -> bool {
        self.pointer_focused.contains(element)
    }

    /// Re-mark an element as pointer-focused after focus restoration.
    pub fn apply_pointer_styling(&mut self, element: FocusId) {
        self.pointer_focused.insert(element);
    }

    pub fn clear(&mut self, element: &FocusId) {
        self.pointer_focused.remove(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: FocusId = FocusId::new("button");

    #[test]
    fn test_pointer_focus_marks_element() {
        let mut classifier = PointerFocusClassifier::new();
        classifier.record(BUTTON, FocusSource::Pointer);
        assert!(classifier.is_pointer_focused(&BUTTON));
    }

    #[test]
    fn test_keyboard_focus_clears_pointer_mark() {
        let mut classifier = PointerFocusClassifier::new();
        classifier.record(BUTTON, FocusSource::Pointer);
        classifier.record(BUTTON, FocusSource::Keyboard);
        assert!(!classifier.is_pointer_focused(&BUTTON));
    }

    #[test]
    fn test_styling_reapplied_after_restore() {
        let mut classifier = PointerFocusClassifier::new();
        classifier.record(BUTTON, FocusSource::Pointer);
        classifier.clear(&BUTTON);
        assert!(!classifier.is_pointer_focused(&BUTTON));

        classifier.apply_pointer_styling(BUTTON);
        assert!(classifier.is_pointer_focused(&BUTTON));
    }
}
