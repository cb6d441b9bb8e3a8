use capsumi_core::{PresentationMode, Theme};

/// Puts the `dark` class on `<html>` while the dark theme is active
pub struct DocumentTheme;

impl PresentationMode for DocumentTheme {
    fn apply(&self, theme: Theme) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            log::warn!("No document element, cannot apply {:?} theme", theme);
            return;
        };

        if let Err(e) = root
            .class_list()
            .toggle_with_force(Theme::DARK_CLASS, theme.is_dark())
        {
            log::warn!("Failed to apply {:?} theme: {:?}", theme, e);
        }
    }
}
