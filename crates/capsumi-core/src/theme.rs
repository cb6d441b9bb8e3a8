//! Light/dark presentation of the whole document

/// Visual mode of the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Class placed on the root element while dark mode is active
    pub const DARK_CLASS: &'static str = "dark";

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Document-wide setter for the presentation mode.
///
/// Implementations must set the mode, not flip it, so the document always
/// mirrors the theme they are given.
#[cfg_attr(test, mockall::automock)]
pub trait PresentationMode {
    fn apply(&self, theme: Theme);
}
