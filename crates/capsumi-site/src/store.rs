//! Reactive wrapper around the page model

use capsumi_core::{dispatch, ContentCard, Message, UiState};
use leptos::prelude::*;

use crate::theme::DocumentTheme;

/// The single page store, shared through context
#[derive(Clone, Copy)]
pub struct Store {
    state: RwSignal<UiState>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(UiState::new()),
        }
    }

    /// Run a message through the core update loop
    pub fn dispatch(&self, message: Message) {
        self.state
            .update(|state| dispatch(state, message, &DocumentTheme));
    }

    pub fn modal(&self) -> Option<ContentCard> {
        self.state.with(|state| state.modal.clone())
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.state.with(|state| state.mobile_menu_open)
    }

    pub fn is_dark(&self) -> bool {
        self.state.with(|state| state.theme.is_dark())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_store() -> Store {
    expect_context::<Store>()
}
