//! Message types for the page (TEA pattern)

use crate::content::ContentCard;
use crate::section::Section;

/// Part of the modal overlay that received a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    /// Dimmed area around the panel
    Backdrop,
    /// Anywhere inside the panel itself
    Panel,
    /// The "×" button in the panel corner
    CloseButton,
}

/// All user-initiated events on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Show a card in the modal, replacing any card already shown
    OpenModal(ContentCard),
    /// Hide the modal and drop its content
    CloseModal,
    /// Click somewhere on the modal overlay
    ModalClick(ModalTarget),

    ToggleMobileMenu,
    CloseMobileMenu,
    /// In-page navigation link activated
    Navigate(Section),

    ToggleTheme,
}
