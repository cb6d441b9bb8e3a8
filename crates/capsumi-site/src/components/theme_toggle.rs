use capsumi_core::Message;
use leptos::prelude::*;

use super::icons::{Moon, Sun};
use crate::store::use_store;

/// Sun while dark (switch to light), moon while light
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_store();

    view! {
        <button
            on:click=move |_| store.dispatch(Message::ToggleTheme)
            aria-label="Toggle theme"
            class="neomorph-flat flex h-10 w-10 items-center justify-center rounded-lg transition-all hover:neomorph-pressed"
        >
            {move || {
                if store.is_dark() {
                    view! { <Sun class="h-5 w-5 text-foreground" /> }.into_any()
                } else {
                    view! { <Moon class="h-5 w-5 text-foreground" /> }.into_any()
                }
            }}
        </button>
    }
}
