use std::collections::HashMap;

use crate::element::FocusId;

/// Tracks which element holds focus inside each focus scope.
///
/// A scope is rooted at a host element: a panel or embedded sub-view that
/// manages focus for its children. Focusing an element records the active
/// chain from that element up through every enclosing host, so the deepest
/// focused element can be recovered later by descending from the top-level
/// scope. This is the "true focus" query that dialog restoration captures
/// and consumers use when the visually focused element may sit inside a
/// nested scope.
#[derive(Debug, Default)]
pub struct FocusScopeTree {
    /// Element -> the scope host it lives under. Top-level elements are absent.
    parent: HashMap<FocusId, FocusId>,
    /// Scope host -> element currently focused within that host's scope.
    active: HashMap<FocusId, FocusId>,
    /// Active element of the top-level scope.
    root_active: Option<FocusId>,
}

impl FocusScopeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare where an element lives. `host` is the scope host element
    /// enclosing it, or None for the top-level scope.
    ///
    /// Registering a host chain that loops back onto `element` is a
    /// programming error.
    pub fn register(&mut self, element: FocusId, host: Option<FocusId>) {
        if let Some(host) = host {
            debug_assert!(
                !self.host_chain_contains(host, element),
                "focus scope cycle: {:?} is already an ancestor of {:?}",
                element,
                host
            );
            self.parent.insert(element, host);
        }
    }

    /// Focus an element, updating the active chain through every enclosing
    /// scope up to the root.
    pub fn focus(&mut self, element: FocusId) {
        // The host itself holding focus means nothing inside it does.
        self.active.remove(&element);

        let mut current = element;
        while let Some(host) = self.parent.get(&current).copied() {
            self.active.insert(host, current);
            current = host;
        }
        self.root_active = Some(current);
    }

    /// Clear the top-level active element.
    pub fn blur(&mut self) {
        self.root_active = None;
    }

    /// The deepest actually-focused element, descending through nested
    /// focus scopes from the top-level active element.
    pub fn focused(&self) -> Option<FocusId> {
        let mut current = self.root_active?;
        while let Some(inner) = self.active.get(&current).copied() {
            current = inner;
        }
        Some(current)
    }

    /// Whether the element was registered under some scope host.
    pub fn is_nested(&self, element: &FocusId) -> bool {
        self.parent.contains_key(element)
    }

    /// Whether any registered element names this one as its scope host.
    pub fn is_scope_host(&self, element: &FocusId) -> bool {
        self.parent.values().any(|host| host == element)
    }

    fn host_chain_contains(&self, start: FocusId, needle: FocusId) -> bool {
        let mut current = start;
        loop {
            if current == needle {
                return true;
            }
            match self.parent.get(&current).copied() {
                Some(host) => current = host,
                None => return false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: FocusId = FocusId::new("panel");
    const INNER: FocusId = FocusId::new("panel-inner");
    const BUTTON: FocusId = FocusId::new("button");

    #[test]
    fn test_top_level_focus() {
        let mut tree = FocusScopeTree::new();
        tree.register(BUTTON, None);

        tree.focus(BUTTON);
        assert_eq!(tree.focused(), Some(BUTTON));

        tree.blur();
        assert_eq!(tree.focused(), None);
    }

    #[test]
    fn test_descends_into_nested_scope() {
        let mut tree = FocusScopeTree::new();
        tree.register(PANEL, None);
        tree.register(INNER, Some(PANEL));

        tree.focus(INNER);
        assert_eq!(tree.focused(), Some(INNER));
        assert!(tree.is_scope_host(&PANEL));
        assert!(tree.is_nested(&INNER));
    }

    #[test]
    fn test_focusing_host_clears_stale_inner_active() {
        let mut tree = FocusScopeTree::new();
        tree.register(PANEL, None);
        tree.register(INNER, Some(PANEL));

        tree.focus(INNER);
        tree.focus(PANEL);

        // The host holds focus now; the old inner entry must not resurface.
        assert_eq!(tree.focused(), Some(PANEL));
    }

    #[test]
    fn test_refocus_after_leaving_scope() {
        let mut tree = FocusScopeTree::new();
        tree.register(PANEL, None);
        tree.register(INNER, Some(PANEL));
        tree.register(BUTTON, None);

        tree.focus(INNER);
        tree.focus(BUTTON);
        assert_eq!(tree.focused(), Some(BUTTON));

        tree.focus(INNER);
        assert_eq!(tree.focused(), Some(INNER));
    }

    #[test]
    fn test_two_level_nesting() {
        const DEEP: FocusId = FocusId::new("deep");
        let mut tree = FocusScopeTree::new();
        tree.register(PANEL, None);
        tree.register(INNER, Some(PANEL));
        tree.register(DEEP, Some(INNER));

        tree.focus(DEEP);
        assert_eq!(tree.focused(), Some(DEEP));
    }
}
