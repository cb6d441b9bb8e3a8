use capsumi_core::SiteConfig;
use capsumi_site::{console_level, App, SITE_TOML};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = SiteConfig::from_toml(SITE_TOML)
        .map(|config| config.logging.level)
        .unwrap_or_default();
    console_log::init_with_level(console_level(level)).expect("error initializing logger");

    // Parsed again now that the logger can report a fallback
    let config = SiteConfig::load_embedded(SITE_TOML);
    mount_to_body(move || view! { <App config=config /> });
}
