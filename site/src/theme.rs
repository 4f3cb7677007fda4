use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// the two display modes
//
// dark is the house style, so it is also what we fall back to whenever the
// persisted value is missing or unrecognized
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeFlag {
    Light,
    #[default]
    Dark,
}

impl ThemeFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeFlag::Light => "light",
            ThemeFlag::Dark => "dark",
        }
    }

    // only the exact literals are accepted -- "Dark" or " dark" are treated as corrupt
    pub fn parse(value: &str) -> Option<ThemeFlag> {
        match value {
            "light" => Some(ThemeFlag::Light),
            "dark" => Some(ThemeFlag::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> ThemeFlag {
        match self {
            ThemeFlag::Light => ThemeFlag::Dark,
            ThemeFlag::Dark => ThemeFlag::Light,
        }
    }
}

impl fmt::Display for ThemeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value slot holding the persisted theme literal.
pub trait ThemeStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// The root display context marker (the `dark` class on `<html>` in the browser).
pub trait ThemeMarker {
    fn apply(&mut self, flag: ThemeFlag);
}

// single source of truth for the active display mode
//
// the store is constructed explicitly and handed to the ui through a context,
// so there is no module-level state; it lives for the whole process and has
// no teardown
#[derive(Debug)]
pub struct ThemeStore<S, M> {
    key: String,
    current: ThemeFlag,
    storage: S,
    marker: M,
}

impl<S: ThemeStorage, M: ThemeMarker> ThemeStore<S, M> {
    pub fn new(key: impl Into<String>, storage: S, marker: M) -> Self {
        ThemeStore {
            key: key.into(),
            current: ThemeFlag::default(),
            storage,
            marker,
        }
    }

    // rehydrate from storage and apply the marker
    //
    // an invalid literal is overwritten with the default so that the next load
    // does not have to re-discover the corruption, but a missing or unreadable
    // value is left alone
    pub fn initialize(&mut self) -> ThemeFlag {
        let stored = match self.storage.read(&self.key) {
            Ok(val) => val,
            Err(err) => {
                warn!("theme storage unavailable, using default: {err}");
                None
            }
        };

        self.current = match stored.as_deref() {
            None => ThemeFlag::default(),
            Some(raw) => match ThemeFlag::parse(raw) {
                Some(flag) => flag,
                None => {
                    warn!("discarding invalid persisted theme {raw:?}");
                    let flag = ThemeFlag::default();
                    self.persist(flag);
                    flag
                }
            },
        };

        debug!("theme initialized to {}", self.current);
        self.marker.apply(self.current);
        self.current
    }

    pub fn get_theme(&self) -> ThemeFlag {
        self.current
    }

    pub fn is_dark(&self) -> bool {
        self.current == ThemeFlag::Dark
    }

    pub fn set_theme(&mut self, next: ThemeFlag) {
        if next == self.current {
            return;
        }

        self.current = next;
        self.persist(next);
        self.marker.apply(next);
        debug!("theme set to {next}");
    }

    pub fn toggle_theme(&mut self) -> ThemeFlag {
        self.set_theme(self.current.toggled());
        self.current
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub(crate) fn marker(&self) -> &M {
        &self.marker
    }

    // writes are best-effort; a failed write only costs persistence across reloads
    fn persist(&mut self, flag: ThemeFlag) {
        if let Err(err) = self.storage.write(&self.key, flag.as_str()) {
            warn!("failed to persist theme {flag}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
        writes: usize,
        broken: bool,
    }

    impl ThemeStorage for MemoryStorage {
        fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
            if self.broken {
                anyhow::bail!("storage disabled");
            }
            Ok(self.values.get(key).cloned())
        }

        fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
            if self.broken {
                anyhow::bail!("storage disabled");
            }
            self.writes += 1;
            self.values.insert(key.to_owned(), value.to_owned());
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct RecordingMarker {
        dark: Option<bool>,
        applied: usize,
    }

    impl ThemeMarker for RecordingMarker {
        fn apply(&mut self, flag: ThemeFlag) {
            self.dark = Some(flag == ThemeFlag::Dark);
            self.applied += 1;
        }
    }

    fn store_with(value: Option<&str>) -> ThemeStore<MemoryStorage, RecordingMarker> {
        let mut storage = MemoryStorage::default();
        if let Some(value) = value {
            storage.values.insert("theme".to_owned(), value.to_owned());
        }
        ThemeStore::new("theme", storage, RecordingMarker::default())
    }

    #[test]
    fn defaults_to_dark_without_persisted_value() {
        let mut store = store_with(None);
        assert_eq!(store.initialize(), ThemeFlag::Dark);
        assert_eq!(store.get_theme(), ThemeFlag::Dark);
        assert_eq!(store.marker().dark, Some(true));
        // nothing to repair, so nothing is written
        assert_eq!(store.storage().writes, 0);
    }

    #[test]
    fn corrupted_value_falls_back_and_is_repaired() {
        let mut store = store_with(Some("blue"));
        assert_eq!(store.initialize(), ThemeFlag::Dark);
        assert_eq!(store.storage().values.get("theme").map(String::as_str), Some("dark"));

        // a second initialization sees the repaired value and writes nothing more
        let writes = store.storage().writes;
        assert_eq!(store.initialize(), ThemeFlag::Dark);
        assert_eq!(store.storage().writes, writes);
    }

    #[test]
    fn persisted_light_survives_reload() {
        let mut store = store_with(None);
        store.initialize();
        store.set_theme(ThemeFlag::Light);

        let ThemeStore { storage, .. } = store;
        let mut reloaded = ThemeStore::new("theme", storage, RecordingMarker::default());
        assert_eq!(reloaded.initialize(), ThemeFlag::Light);
        assert_eq!(reloaded.marker().dark, Some(false));
    }

    #[test]
    fn set_theme_is_idempotent() {
        let mut store = store_with(None);
        store.initialize();

        store.set_theme(ThemeFlag::Light);
        let writes = store.storage().writes;
        let applied = store.marker().applied;

        store.set_theme(ThemeFlag::Light);
        assert_eq!(store.storage().writes, writes);
        assert_eq!(store.marker().applied, applied);
        assert_eq!(store.storage().values.get("theme").map(String::as_str), Some("light"));
        assert_eq!(store.marker().dark, Some(false));
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut store = store_with(Some("light"));
        store.initialize();

        assert_eq!(store.toggle_theme(), ThemeFlag::Dark);
        assert!(store.is_dark());
        assert_eq!(store.storage().values.get("theme").map(String::as_str), Some("dark"));

        assert_eq!(store.toggle_theme(), ThemeFlag::Light);
        assert_eq!(store.marker().dark, Some(false));
    }

    #[test]
    fn unavailable_storage_degrades_to_default() {
        let mut storage = MemoryStorage::default();
        storage.broken = true;
        let mut store = ThemeStore::new("theme", storage, RecordingMarker::default());

        assert_eq!(store.initialize(), ThemeFlag::Dark);

        // the in-memory value and the marker still follow the toggle
        store.toggle_theme();
        assert_eq!(store.get_theme(), ThemeFlag::Light);
        assert_eq!(store.marker().dark, Some(false));
    }

    #[test]
    fn parse_accepts_only_exact_literals() {
        assert_eq!(ThemeFlag::parse("light"), Some(ThemeFlag::Light));
        assert_eq!(ThemeFlag::parse("dark"), Some(ThemeFlag::Dark));
        assert_eq!(ThemeFlag::parse("Dark"), None);
        assert_eq!(ThemeFlag::parse(""), None);
        assert_eq!(serde_json::to_string(&ThemeFlag::Light).unwrap(), "\"light\"");
    }
}
