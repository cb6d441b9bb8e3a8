use capsumi_core::{Catalog, Section};
use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::components::tile_grid::{GridLayout, TileGrid};

#[component]
pub fn Home(catalog: Catalog) -> impl IntoView {
    let Catalog {
        assignments,
        progress,
        ui_progress,
    } = catalog;

    view! {
        <main>
            <PageSection section=Section::About>
                <About />
            </PageSection>

            <PageSection section=Section::Assignments>
                <TileGrid tiles=assignments layout=GridLayout::Pair />
            </PageSection>

            <PageSection section=Section::Progress>
                <TileGrid tiles=progress layout=GridLayout::Triple />
            </PageSection>

            <PageSection section=Section::UiProgress>
                <TileGrid tiles=ui_progress layout=GridLayout::Triple />
            </PageSection>
        </main>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <div class="neomorph mt-8 rounded-[1.25rem] p-6 sm:mt-12 sm:p-8 lg:p-12">
            <p class="text-base leading-relaxed text-foreground sm:text-lg">
                "The name " <span class="font-bold text-accent">"Capsumi"</span> " comes from the word "
                <span class="font-bold">"\"capsule\""</span>
                " \u{2014} a vessel used to hold memories, messages, and artifacts that tell a story \
                 over time. Our project builds on that idea, focusing on collecting and sharing \
                 meaningful memories that reflect everyday life and personal experiences."
                <br />
                <br />
                "Coincidentally, Capsumi also means strawberries in Romanian \u{2014} a discovery \
                 that felt special to us. During our Erasmus semester in Portugal, we met some \
                 amazing Romanian flatmates, and this connection inspired our choice of the \
                 strawberry as our logo. With them being Romanian, the idea of strawberries became \
                 our own little capsule \u{2014} a symbol of the friendships and memories we created \
                 together."
                <br />
                <br />
                "Capsumi represents the idea of preserving memories \u{2014} moments worth keeping \
                 and revisiting \u{2014} while staying rooted in the connections and stories that \
                 shape them."
            </p>
        </div>
    }
}
