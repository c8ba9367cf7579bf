//! Configuration Loading
//!
//! The page may carry `<meta name="tier-list-config" content='{...}'>`.
//! A missing tag means defaults; a broken one means defaults plus the
//! error, reported once logging is up.

use tier_list_core::{Config, DomainError};

pub const CONFIG_META_NAME: &str = "tier-list-config";

/// Raw JSON from the config meta tag, if the page has one
fn meta_content() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", CONFIG_META_NAME);
    let element = document.query_selector(&selector).ok()??;
    element.get_attribute("content")
}

/// Parse page config text, falling back to defaults
pub fn parse_config(raw: Option<&str>) -> (Config, Option<DomainError>) {
    match raw.map(str::trim).filter(|text| !text.is_empty()) {
        None => (Config::default(), None),
        Some(text) => match Config::from_json(text) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        },
    }
}

pub fn load_config() -> (Config, Option<DomainError>) {
    parse_config(meta_content().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tier_list_core::ImportMode;

    #[test]
    fn test_missing_or_blank_is_default() {
        assert_eq!(parse_config(None), (Config::default(), None));
        assert_eq!(parse_config(Some("  ")), (Config::default(), None));
    }

    #[test]
    fn test_valid_config() {
        let (config, err) = parse_config(Some(r#"{"importMode": "replace", "shortcuts": false}"#));
        assert!(err.is_none());
        assert_eq!(config.import_mode, ImportMode::Replace);
        assert!(!config.shortcuts);
    }

    #[test]
    fn test_broken_config_falls_back() {
        let (config, err) = parse_config(Some("{shortcuts"));
        assert_eq!(config, Config::default());
        assert!(matches!(err, Some(DomainError::Config(_))));
    }
}
