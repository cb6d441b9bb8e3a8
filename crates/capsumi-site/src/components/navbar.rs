use capsumi_core::{Message, Section};
use leptos::prelude::*;

use super::icons::{Close, Menu};
use super::theme_toggle::ThemeToggle;
use crate::store::use_store;

#[component]
pub fn Navbar(title: String) -> impl IntoView {
    let store = use_store();
    let is_menu_open = move || store.is_mobile_menu_open();

    view! {
        <nav class="sticky top-0 z-50 bg-background/95 backdrop-blur-sm">
            <div class="neomorph-flat mx-2 my-2 rounded-[1.25rem] px-4 py-3 sm:mx-4 sm:my-4 sm:px-8 sm:py-4">
                <div class="flex items-center justify-between">
                    <h1 class="text-xl font-bold text-foreground sm:text-2xl">{title}</h1>

                    <ul class="hidden items-center gap-4 md:flex lg:gap-8">
                        {Section::ALL.into_iter().map(|section| {
                            view! {
                                <li>
                                    <a
                                        href=section.href()
                                        class="font-semibold text-foreground transition-colors hover:text-accent"
                                    >
                                        {section.nav_label()}
                                    </a>
                                </li>
                            }
                        }).collect_view()}
                        <li>
                            <ThemeToggle />
                        </li>
                    </ul>

                    // Mobile controls
                    <div class="flex gap-1.5 md:hidden">
                        <ThemeToggle />
                        <button
                            on:click=move |_| store.dispatch(Message::ToggleMobileMenu)
                            aria-label="Toggle navigation"
                            aria-expanded=move || is_menu_open().to_string()
                            class="neomorph-flat flex h-10 w-10 items-center justify-center rounded-lg"
                        >
                            {move || {
                                if is_menu_open() {
                                    view! { <Close class="h-6 w-6 text-foreground" /> }.into_any()
                                } else {
                                    view! { <Menu class="h-6 w-6 text-foreground" /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>

                <Show when=is_menu_open>
                    <ul class="mt-4 flex flex-col gap-3 border-t border-muted pt-4 md:hidden">
                        {Section::ALL.into_iter().map(|section| {
                            view! {
                                <li>
                                    <a
                                        href=section.href()
                                        on:click=move |_| store.dispatch(Message::Navigate(section))
                                        class="block font-semibold text-foreground transition-colors hover:text-accent"
                                    >
                                        {section.nav_label()}
                                    </a>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </Show>
            </div>
        </nav>
    }
}
