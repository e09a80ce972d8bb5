//! Shared tokens and geometry for the widget boundary.

/// Size token applied to the input and republished to descendant items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
    Mini,
    Small,
    #[default]
    Medium,
    Large,
}

/// Validation-state token forwarded to the text-input primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Secondary,
    Success,
    Warning,
    Error,
}

/// Anchor rectangle measured by the host's layout pass.
///
/// Units are whatever the host uses (cells, pixels). The widget only
/// stores and republishes it for overlay positioning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rect.
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
