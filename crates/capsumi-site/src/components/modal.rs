use capsumi_core::{Author, ContentCard, Message, ModalTarget};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::store::use_store;

/// Overlay for the open card; renders nothing while closed
#[component]
pub fn Modal() -> impl IntoView {
    let store = use_store();
    let card = Memo::new(move |_| store.modal());

    move || card.get().map(|card| view! { <ModalOverlay card=card /> })
}

#[component]
fn ModalOverlay(card: ContentCard) -> impl IntoView {
    let store = use_store();
    let ContentCard {
        title,
        description,
        authors,
    } = card;

    // Clicks must not bubble from the panel to the backdrop
    let on_panel_click = move |ev: MouseEvent| {
        ev.stop_propagation();
        store.dispatch(Message::ModalClick(ModalTarget::Panel));
    };
    let on_close_click = move |ev: MouseEvent| {
        ev.stop_propagation();
        store.dispatch(Message::ModalClick(ModalTarget::CloseButton));
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-foreground/25 p-4 backdrop-blur-sm"
            on:click=move |_| store.dispatch(Message::ModalClick(ModalTarget::Backdrop))
        >
            <div
                role="dialog"
                aria-modal="true"
                class="neomorph-modal relative max-h-[90vh] w-full max-w-2xl overflow-y-auto rounded-[1.25rem] bg-background p-6 sm:max-h-[80vh] sm:p-8"
                on:click=on_panel_click
            >
                <button
                    on:click=on_close_click
                    aria-label="Close"
                    class="neomorph-flat absolute right-3 top-3 flex h-10 w-10 items-center justify-center rounded-full text-2xl font-bold text-foreground transition-all hover:neomorph-pressed hover:text-accent sm:right-4 sm:top-4"
                >
                    "\u{00D7}"
                </button>
                <h3 class="mb-4 border-b-4 border-accent pb-2 pr-12 text-xl font-bold text-foreground sm:mb-6 sm:text-2xl lg:text-3xl">
                    {title}
                </h3>
                <p class="mb-4 text-sm leading-relaxed text-foreground sm:mb-6 sm:text-base">
                    {description}
                </p>
                {authors
                    .filter(|authors| !authors.is_empty())
                    .map(|authors| view! { <AuthorList authors=authors /> })}
            </div>
        </div>
    }
}

#[component]
fn AuthorList(authors: Vec<Author>) -> impl IntoView {
    view! {
        <div class="mt-6 sm:mt-8">
            <h4 class="mb-3 text-lg font-bold text-foreground sm:mb-4 sm:text-xl">"Authors:"</h4>
            <ul class="space-y-2 sm:space-y-3">
                {authors.into_iter().map(|author| {
                    view! {
                        <li>
                            <a
                                href=author.document_url
                                class="block text-sm font-semibold text-foreground transition-colors hover:text-accent sm:text-base"
                            >
                                {author.name}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
