//! Add-Officer Panel Layout
//!
//! The side panel is either expanded (full width, contents shown) or
//! collapsed to a narrow strip.

pub const EXPANDED_WIDTH: &str = "30em";
pub const COLLAPSED_WIDTH: &str = "4em";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub expanded: bool,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self { expanded: true }
    }
}

impl PanelLayout {
    pub fn toggled(self) -> Self {
        Self { expanded: !self.expanded }
    }

    /// Width of the add-officer panel
    pub fn width(self) -> &'static str {
        if self.expanded { EXPANDED_WIDTH } else { COLLAPSED_WIDTH }
    }

    /// Negative margin that pulls the panel alongside the officer list
    pub fn panel_margin_left(self) -> String {
        format!("-{}", self.width())
    }

    /// Right margin of the officer list, matching the panel width
    pub fn list_margin_right(self) -> &'static str {
        self.width()
    }

    /// Label of the show/hide toggle
    pub fn toggle_label(self) -> &'static str {
        if self.expanded { "(hide)" } else { "(show)" }
    }
}
