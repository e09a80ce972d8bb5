//! Display mode selection and trailing-icon policy.

/// Which of the mutually-exclusive dropdown contents is shown.
///
/// Derived, never stored: a pure function of the searching flag, the option
/// count, and the current text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// A search is in flight: searching view (custom or default).
    Searching,
    /// No options and a non-empty query: empty view (custom or default).
    Empty,
    /// The normalized option list.
    Options,
    /// Nothing: an empty query with no options yet is not a failure state.
    None,
}

/// Select the display mode.
pub fn select_display_mode(
    searching: Option<bool>,
    option_count: usize,
    text: &str,
) -> DisplayMode {
    if searching == Some(true) {
        return DisplayMode::Searching;
    }
    if option_count == 0 {
        if text.is_empty() {
            return DisplayMode::None;
        }
        return DisplayMode::Empty;
    }
    DisplayMode::Options
}

/// Trailing icon shown inside the text input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingIcon {
    /// No icon; the slot is free for the clear affordance.
    #[default]
    None,
    /// The loading glyph.
    Loading,
    /// A permanently reserved empty glyph slot, so toggling to `Loading`
    /// later causes no layout shift.
    Reserved,
}

/// Map the tri-state searching flag to a trailing icon.
///
/// Hosts that never set `searching` get no icon (and keep the clear
/// affordance); hosts that drive a server search get the reserved/loading
/// glyph pair and lose the clear affordance. The asymmetry between an
/// absent flag and an explicit `false` is intentional.
pub fn trailing_icon(searching: Option<bool>) -> TrailingIcon {
    match searching {
        None => TrailingIcon::None,
        Some(true) => TrailingIcon::Loading,
        Some(false) => TrailingIcon::Reserved,
    }
}

/// Whether the clear affordance is enabled.
pub fn show_clear_icon(clearable: bool, searching: Option<bool>) -> bool {
    clearable && searching.is_none()
}
