use anyhow;

use gloo_console::error as console_error;
use web_sys::Storage;

use site::theme::ThemeStorage;

// browsers with site data blocked throw on the localStorage getter itself, so
// we fetch it fallibly instead of assuming it exists
fn local_storage() -> anyhow::Result<Storage> {
    let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no window"))?;

    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(anyhow::Error::msg("local storage not available")),
        Err(err) => {
            console_error!(format!("Failed to open local storage: {err:?}"));
            Err(anyhow::Error::msg("Local storage failure, see console log"))
        }
    }
}

// values are stored as bare strings, not json
pub fn set_local_storage(key: &str, value: &str) -> anyhow::Result<()> {
    local_storage()?.set_item(key, value).map_err(|err| {
        console_error!(format!("Failed to set local storage {key}: {err:?}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

pub fn get_local_storage(key: &str) -> anyhow::Result<Option<String>> {
    local_storage()?.get_item(key).map_err(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// browser backing for the theme slot
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalThemeStorage;

impl ThemeStorage for LocalThemeStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        get_local_storage(key)
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        set_local_storage(key, value)
    }
}
