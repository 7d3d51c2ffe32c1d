/// Focus mode determines how keyboard focus is acquired from the mouse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMode {
    /// Focus only changes on click (Windows-style)
    /// - Mouse click: focuses element
    /// - Mouse hover: no focus change
    Click,

    /// Focus follows mouse hover (Linux WM-style)
    /// - Mouse hover: immediately focuses element
    /// - More responsive but can be chaotic
    Hover,

    /// Hybrid: hover focuses only when nothing is focused
    /// - If nothing focused: hover focuses
    /// - If something focused: hover doesn't steal focus
    /// - Preserves intentional Tab navigation
    HoverWhenUnfocused,
}

impl Default for FocusMode {
    fn default() -> Self {
        FocusMode::Click
    }
}

/// Runtime configuration for focus behavior
///
/// Holds the user preferences that affect how focus is acquired and
/// restored. Currently set statically via Default, but designed to be
/// loaded from config files or CLI arguments by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// How keyboard focus is acquired (click, hover, or hybrid)
    pub focus_mode: FocusMode,
}

impl RuntimeConfig {
    /// Create a new config with explicit settings
    pub fn new(focus_mode: FocusMode) -> Self {
        Self { focus_mode }
    }

    /// Create config with a custom focus mode
    pub fn with_focus_mode(mode: FocusMode) -> Self {
        Self { focus_mode: mode }
    }
}
