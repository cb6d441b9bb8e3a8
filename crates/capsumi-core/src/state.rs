//! Page state (Model in TEA pattern)

use crate::content::ContentCard;
use crate::theme::Theme;

/// Transient UI state, reset on every page load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Card shown in the modal; the modal is open exactly while this is set
    pub modal: Option<ContentCard>,
    pub mobile_menu_open: bool,
    pub theme: Theme,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn open_modal(&mut self, card: ContentCard) {
        self.modal = Some(card);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Flip the theme and return the new value
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
