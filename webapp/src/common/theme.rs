use dioxus::prelude::*;
use tracing::warn;

use site::theme::{ThemeFlag, ThemeMarker, ThemeStore};

use crate::common::storage::LocalThemeStorage;

pub const DARK_CLASS: &str = "dark";

// toggles the dark class on <html>, which flips the css variables in style::variables
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentMarker;

impl ThemeMarker for DocumentMarker {
    fn apply(&mut self, flag: ThemeFlag) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            warn!("no document root to mark with theme {flag}");
            return;
        };

        let classes = root.class_list();
        let result = match flag {
            ThemeFlag::Dark => classes.add_1(DARK_CLASS),
            ThemeFlag::Light => classes.remove_1(DARK_CLASS),
        };

        if let Err(err) = result {
            warn!("failed to apply theme {flag}: {err:?}");
        }
    }
}

pub type SiteThemeStore = ThemeStore<LocalThemeStorage, DocumentMarker>;

// provided once by App; everything below reads it to pick a style variant
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext(pub Signal<SiteThemeStore>);

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.0.read().is_dark()
    }

    pub fn toggle(&mut self) {
        self.0.write().toggle_theme();
    }
}

pub fn use_theme_provider(key: String) -> ThemeContext {
    use_context_provider(move || {
        let mut store = ThemeStore::new(key, LocalThemeStorage, DocumentMarker);
        store.initialize();
        ThemeContext(Signal::new(store))
    })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
