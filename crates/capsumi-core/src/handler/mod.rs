//! Handler module - TEA update function and dispatch loop
//!
//! - `update`: Main update() function and message dispatch
//! - [`dispatch`]: Drives follow-up messages and executes actions

pub(crate) mod update;

#[cfg(test)]
mod tests;

use tracing::trace;

use crate::message::Message;
use crate::state::UiState;
use crate::theme::{PresentationMode, Theme};

// Re-export main entry point
pub use update::update;

/// Side effects the view layer performs after update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// Apply the theme to the whole document
    ApplyTheme(Theme),
}

/// Result of processing a message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the dispatcher to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

/// Process a message and every follow-up it produces.
///
/// Actions are executed against `presentation` in the order they are
/// returned. Runs synchronously to completion.
pub fn dispatch(state: &mut UiState, message: Message, presentation: &dyn PresentationMode) {
    let mut next = Some(message);

    while let Some(msg) = next.take() {
        let result = update(state, msg);

        if let Some(action) = result.action {
            trace!("Executing {:?}", action);
            match action {
                UpdateAction::ApplyTheme(theme) => presentation.apply(theme),
            }
        }

        next = result.message;
    }
}
