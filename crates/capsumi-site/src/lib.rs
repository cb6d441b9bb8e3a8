pub mod components;
pub mod pages;
pub mod store;
pub mod theme;

use capsumi_core::{Catalog, LogLevel, SiteConfig};
use components::modal::Modal;
use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use pages::home::Home;
use store::Store;

/// Site configuration, embedded at compile time
pub const SITE_TOML: &str = include_str!("../site.toml");

/// Map the configured level onto the `log` facade
pub fn console_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Trace => log::Level::Trace,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Error => log::Level::Error,
    }
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(Store::new());

    let catalog = Catalog::new(&config.assets);
    let title = config.site.title;
    log::info!("{} site ready", title);

    view! {
        <Title text=title.clone() />
        <div class="min-h-screen bg-background text-foreground">
            <Navbar title=title />
            <Home catalog=catalog />
            <Modal />
        </div>
    }
}
