use serde::{Deserialize, Serialize};
use toml;
use tracing::{Level, debug, error, instrument};

// site configuration
//
// these are the handful of layout and behavior knobs used by the webapp; every
// field has a default so a partial (or empty) [config] table is fine
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    // height of the fixed nav bar, subtracted from scroll targets
    pub nav_offset: f64,

    // how far below the viewport top a section counts as active
    pub look_ahead: f64,

    // wait after mount before honoring a deep link, so images can settle
    pub deferred_scroll_ms: u32,

    // minimum spacing between active-section recomputes (one frame)
    pub scroll_throttle_ms: u32,

    // local storage key for the persisted theme
    pub theme_key: String,

    // reject quote requests whose email is obviously malformed
    pub quote_email_check: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            nav_offset: 70.0,
            look_ahead: 100.0,
            deferred_scroll_ms: 100,
            scroll_throttle_ms: 16,
            theme_key: String::from("theme"),
            quote_email_check: true,
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: SiteConfig,
}

impl SiteConfig {
    pub fn from_toml(doc: &str) -> anyhow::Result<SiteConfig> {
        let data: TomlConfigFile = toml::from_str(doc)?;
        Ok(data.config)
    }

    // the site must render even with a broken config, so we log and carry on
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml_or_default(doc: &str) -> SiteConfig {
        match SiteConfig::from_toml(doc) {
            Ok(config) => {
                debug!("successfully parsed site config");
                config
            }
            Err(err) => {
                error!("failed to parse site config, using defaults: {err}");
                SiteConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_keeps_defaults() {
        let config = SiteConfig::from_toml(
            r#"
            [config]
            nav_offset = 64.0
            quote_email_check = false
            "#,
        )
        .unwrap();

        assert_eq!(config.nav_offset, 64.0);
        assert!(!config.quote_email_check);
        assert_eq!(config.look_ahead, 100.0);
        assert_eq!(config.theme_key, "theme");
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(SiteConfig::from_toml("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_document_falls_back() {
        assert!(SiteConfig::from_toml("[config]\nnav_offset = \"tall\"").is_err());
        assert_eq!(
            SiteConfig::from_toml_or_default("[config"),
            SiteConfig::default()
        );
    }
}
