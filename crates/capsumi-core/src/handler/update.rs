//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::message::{Message, ModalTarget};
use crate::state::UiState;

use super::{UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut UiState, message: Message) -> UpdateResult {
    match message {
        Message::OpenModal(card) => {
            debug!("Opening modal: {}", card.title);
            state.open_modal(card);
            UpdateResult::none()
        }

        Message::CloseModal => {
            if state.is_modal_open() {
                debug!("Closing modal");
            }
            state.close_modal();
            UpdateResult::none()
        }

        Message::ModalClick(target) => match target {
            ModalTarget::Backdrop | ModalTarget::CloseButton => {
                UpdateResult::message(Message::CloseModal)
            }
            // Clicks inside the panel stay inside the panel
            ModalTarget::Panel => UpdateResult::none(),
        },

        Message::ToggleMobileMenu => {
            state.toggle_mobile_menu();
            debug!("Mobile menu open: {}", state.mobile_menu_open);
            UpdateResult::none()
        }

        Message::CloseMobileMenu => {
            state.close_mobile_menu();
            UpdateResult::none()
        }

        Message::Navigate(section) => {
            debug!("Navigating to {}", section.href());
            UpdateResult::message(Message::CloseMobileMenu)
        }

        Message::ToggleTheme => {
            let theme = state.toggle_theme();
            debug!("Theme switched to {:?}", theme);
            UpdateResult::action(UpdateAction::ApplyTheme(theme))
        }
    }
}
