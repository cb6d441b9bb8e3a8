use capsumi_core::Section;
use leptos::prelude::*;

/// Anchored section with the underlined heading
#[component]
pub fn PageSection(section: Section, children: Children) -> impl IntoView {
    view! {
        <section id=section.anchor() class="px-4 py-12 sm:px-8 sm:py-16 lg:py-20">
            <div class="mx-auto max-w-6xl">
                <h2 class="mb-2 inline-block border-b-4 border-accent pb-2 text-2xl font-bold text-foreground sm:text-3xl lg:text-4xl">
                    {section.heading()}
                </h2>
                {children()}
            </div>
        </section>
    }
}
