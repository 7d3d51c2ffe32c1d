/// Stable identifier for focusable UI elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusId(pub &'static str);

impl FocusId {
    /// Create a new FocusId with a static string identifier
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }
}

/// Stable identifier for modal dialogs
///
/// Separate from [`FocusId`] so dialog handles and focusable elements
/// cannot be mixed up at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialogId(pub &'static str);

impl DialogId {
    /// Create a new DialogId with a static string identifier
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }
}
