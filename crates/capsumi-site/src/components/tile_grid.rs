use capsumi_core::{Message, Tile};
use leptos::prelude::*;

use crate::store::use_store;

#[derive(Clone, Copy, Default)]
pub enum GridLayout {
    /// Two wide cards per row (assignments)
    #[default]
    Pair,
    /// Up to three compact cards per row (milestones)
    Triple,
}

impl GridLayout {
    fn grid_class(self) -> &'static str {
        match self {
            GridLayout::Pair => "mt-8 grid gap-4 sm:mt-12 sm:gap-6 md:grid-cols-2",
            GridLayout::Triple => "mt-8 grid gap-4 sm:mt-12 sm:grid-cols-2 sm:gap-6 lg:grid-cols-3",
        }
    }

    fn label_class(self) -> &'static str {
        match self {
            GridLayout::Pair => "text-xl font-bold text-foreground group-hover:text-accent sm:text-2xl",
            GridLayout::Triple => "text-lg font-bold text-foreground group-hover:text-accent sm:text-xl",
        }
    }
}

#[component]
pub fn TileGrid(
    tiles: Vec<Tile>,
    #[prop(optional)] layout: GridLayout,
) -> impl IntoView {
    let store = use_store();
    let label_class = layout.label_class();

    view! {
        <div class=layout.grid_class()>
            {tiles.into_iter().map(|tile| {
                let Tile { label, hint, card } = tile;
                view! {
                    <button
                        on:click=move |_| store.dispatch(Message::OpenModal(card.clone()))
                        class="neomorph group rounded-[1.25rem] p-6 text-left transition-all hover:neomorph-pressed active:neomorph-inset sm:p-8"
                    >
                        <h3 class=label_class>{label}</h3>
                        <p class="mt-3 text-sm text-muted-foreground sm:mt-4 sm:text-base">{hint}</p>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
